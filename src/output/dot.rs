//! DOT file output writer.

use super::{ensure_parent_dir, validate_path};
use crate::graph::DotGraph;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write a DOT description to a file
///
/// **Public** - main entry point for DOT output
pub fn write_dot(dot: &DotGraph, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing DOT graph to: {}", output_path.display());

    validate_path(output_path)?;

    if output_path.extension().map_or(true, |ext| ext != "dot" && ext != "gv") {
        debug!("DOT file does not have a .dot/.gv extension: {}", output_path.display());
    }

    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, dot.as_str()).map_err(OutputError::WriteFailed)?;

    info!("DOT graph written successfully ({} bytes)", dot.as_str().len());

    Ok(())
}

/// Write a DOT description to a fresh scratch file beside `image_path`
///
/// The file gets a unique name, so nothing already on disk is touched, and it
/// is removed when the returned handle is dropped.
pub fn write_temp_dot(dot: &DotGraph, image_path: &Path) -> Result<NamedTempFile, OutputError> {
    ensure_parent_dir(image_path)?;

    let dir = match image_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::Builder::new()
        .prefix(".call-trace-")
        .suffix(".dot")
        .tempfile_in(dir)?;
    file.write_all(dot.as_str().as_bytes())?;
    file.flush()?;

    debug!("Scratch DOT graph written to: {}", file.path().display());

    Ok(file)
}
