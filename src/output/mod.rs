//! Output writers for graph reports, DOT files and rendered images.
//!
//! This module handles writing data to disk in various formats:
//! - JSON graph reports (edges, hot edges, adjacency matrix)
//! - DOT graph descriptions
//! - Images rendered by Graphviz

pub mod dot;
pub mod json;
pub mod render;
pub mod report;

// Re-export main functions
pub use dot::{write_dot, write_temp_dot};
pub use json::{read_report, write_report};
pub use render::{render_dot, render_format};
pub use report::{to_report, GraphReport, MatrixSection};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create the parent directories of an output file
fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
