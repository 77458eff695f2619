//! Test input enumeration and selection.

use crate::utils::error::RunnerError;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Which test inputs drive the instrumented runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSelection {
    /// A single input, by zero-based position in the sorted listing
    Single(usize),
    /// Every input, one run each, aggregated into one graph
    All,
}

impl Default for InputSelection {
    fn default() -> Self {
        InputSelection::Single(0)
    }
}

/// List the entries of a test input directory
///
/// **Public** - main entry point for input discovery
///
/// Only direct children are listed, sorted by file name so that positional
/// selection is reproducible across platforms.
pub fn enumerate_test_inputs(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, RunnerError> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(RunnerError::InputsNotFound(dir.to_path_buf()));
    }

    let mut inputs = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            inputs.push(entry.into_path());
        }
    }

    debug!("Found {} test inputs in {}", inputs.len(), dir.display());

    Ok(inputs)
}

/// Pick the inputs to run
///
/// # Errors
/// * `RunnerError::NoInputs` - the listing is empty
/// * `RunnerError::InputIndexOutOfRange` - `Single(index)` past the end
pub fn select_inputs(
    inputs: &[PathBuf],
    selection: InputSelection,
    dir: &Path,
) -> Result<Vec<PathBuf>, RunnerError> {
    if inputs.is_empty() {
        return Err(RunnerError::NoInputs(dir.to_path_buf()));
    }

    match selection {
        InputSelection::All => Ok(inputs.to_vec()),
        InputSelection::Single(index) => inputs
            .get(index)
            .map(|input| vec![input.clone()])
            .ok_or(RunnerError::InputIndexOutOfRange {
                index,
                available: inputs.len(),
            }),
    }
}
