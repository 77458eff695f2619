//! Cleanup of transient files produced around an instrumented run.

use log::{debug, warn};
use std::path::PathBuf;

/// Removes registered artifact files when dropped
///
/// Files that do not exist are ignored. Cleanup is skipped entirely when the
/// guard was created with `keep = true`.
#[derive(Debug, Default)]
pub struct ArtifactGuard {
    paths: Vec<PathBuf>,
    keep: bool,
}

impl ArtifactGuard {
    pub fn new(keep: bool) -> Self {
        Self {
            paths: Vec::new(),
            keep,
        }
    }

    /// Register a file for removal
    pub fn track(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }
}

impl Drop for ArtifactGuard {
    fn drop(&mut self) {
        if self.keep {
            debug!("Keeping {} artifact(s)", self.paths.len());
            return;
        }

        for path in &self.paths {
            if !path.is_file() {
                continue;
            }
            match std::fs::remove_file(path) {
                Ok(()) => debug!("Removed artifact: {}", path.display()),
                Err(e) => warn!("Failed to remove artifact {}: {}", path.display(), e),
            }
        }
    }
}
