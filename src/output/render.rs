//! Image rendering through the Graphviz `dot` executable.
//!
//! Rendering is delegated entirely to Graphviz; this module only picks the
//! output format and reports failures.

use super::{ensure_parent_dir, validate_path};
use crate::utils::config::{GRAPHVIZ_BINARY, RENDER_FORMATS};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::path::Path;
use std::process::{Command, Stdio};

/// Image format derived from the output file extension
///
/// **Public** - validated early by the commands
pub fn render_format(image_path: &Path) -> Result<&'static str, OutputError> {
    let ext = image_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    RENDER_FORMATS
        .iter()
        .copied()
        .find(|format| *format == ext)
        .ok_or_else(|| {
            OutputError::InvalidPath(format!(
                "Unsupported image format for {} (expected one of: {})",
                image_path.display(),
                RENDER_FORMATS.join(", ")
            ))
        })
}

/// Render a DOT file to an image
///
/// **Public** - main entry point for rendering
///
/// # Errors
/// * `OutputError::InvalidPath` - unsupported extension or unusable path
/// * `OutputError::RenderFailed` - Graphviz missing or exited with an error
pub fn render_dot(
    dot_path: impl AsRef<Path>,
    image_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let dot_path = dot_path.as_ref();
    let image_path = image_path.as_ref();

    let format = render_format(image_path)?;
    validate_path(image_path)?;
    ensure_parent_dir(image_path)?;

    info!("Rendering {} to {}", dot_path.display(), image_path.display());

    let output = Command::new(GRAPHVIZ_BINARY)
        .arg(format!("-T{}", format))
        .arg(dot_path)
        .arg("-o")
        .arg(image_path)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            OutputError::RenderFailed(format!("cannot run `{}`: {}", GRAPHVIZ_BINARY, e))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(OutputError::RenderFailed(format!(
            "`{}` exited with {}: {}",
            GRAPHVIZ_BINARY,
            output.status,
            stderr.trim()
        )));
    }

    debug!("Graphviz finished rendering {}", image_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_format_from_extension() {
        assert_eq!(render_format(Path::new("graph.png")).unwrap(), "png");
        assert_eq!(render_format(Path::new("out/graph.PDF")).unwrap(), "pdf");
        assert_eq!(render_format(Path::new("graph.svg")).unwrap(), "svg");
    }

    #[test]
    fn test_render_format_rejects_unknown() {
        assert!(render_format(Path::new("graph.bmp")).is_err());
        assert!(render_format(Path::new("graph")).is_err());
    }
}
