//! Execution of the instrumented binary.
//!
//! The binary is run once per test input with its output discarded. The
//! instrumentation writes a call trace CSV into the working directory,
//! which is read back after the process exits.

use crate::parser::schema::CallRecord;
use crate::parser::trace_csv::read_trace_file;
use crate::utils::config::DEFAULT_TRACE_FILE;
use crate::utils::error::RunnerError;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

/// Runs an instrumented binary and collects its call trace
#[derive(Debug, Clone)]
pub struct InstrumentedRunner {
    binary: PathBuf,
    flags: Vec<String>,
    trace_file: PathBuf,
    working_dir: PathBuf,
}

impl InstrumentedRunner {
    /// Create a runner for `binary`
    ///
    /// # Errors
    /// * `RunnerError::BinaryNotFound` - the binary path does not exist
    pub fn new(binary: impl Into<PathBuf>) -> Result<Self, RunnerError> {
        let binary = binary.into();

        if !binary.exists() {
            return Err(RunnerError::BinaryNotFound(binary));
        }

        Ok(Self {
            binary,
            flags: Vec::new(),
            trace_file: PathBuf::from(DEFAULT_TRACE_FILE),
            working_dir: PathBuf::from("."),
        })
    }

    /// Arguments passed before the test input on every run
    pub fn with_flags(mut self, flags: Vec<String>) -> Self {
        self.flags = flags;
        self
    }

    /// Where the instrumentation writes its trace
    ///
    /// Relative paths are resolved against the working directory.
    pub fn with_trace_file(mut self, trace_file: impl Into<PathBuf>) -> Self {
        self.trace_file = trace_file.into();
        self
    }

    /// Directory the binary runs in
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = working_dir.into();
        self
    }

    /// Resolved location of the trace file
    pub fn trace_path(&self) -> PathBuf {
        if self.trace_file.is_absolute() {
            self.trace_file.clone()
        } else {
            self.working_dir.join(&self.trace_file)
        }
    }

    /// Run the binary on one input and return the recorded calls
    ///
    /// **Public** - main entry point for trace collection
    ///
    /// A trace left over from an earlier run is removed first, so a run that
    /// writes nothing is reported instead of silently reusing stale data.
    /// A non-zero exit status is logged but does not fail the run: crashing
    /// inputs still leave a useful partial trace.
    ///
    /// # Errors
    /// * `RunnerError::SpawnFailed` - the binary could not be started
    /// * `RunnerError::MissingTrace` - no trace file after the run
    /// * `RunnerError::Trace` - the trace could not be parsed
    pub fn run(&self, input: &Path) -> Result<Vec<CallRecord>, RunnerError> {
        let trace_path = self.trace_path();

        if trace_path.is_file() {
            debug!("Removing stale trace: {}", trace_path.display());
            std::fs::remove_file(&trace_path)?;
        }

        info!("Running {} on {}", self.binary.display(), input.display());
        let start_time = Instant::now();

        let status = Command::new(&self.binary)
            .args(&self.flags)
            .arg(input)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|error| RunnerError::SpawnFailed {
                binary: self.binary.clone(),
                error,
            })?;

        debug!(
            "Run finished in {:.2}s with {}",
            start_time.elapsed().as_secs_f64(),
            status
        );

        if !status.success() {
            warn!("{} exited with {} on {}", self.binary.display(), status, input.display());
        }

        if !trace_path.is_file() {
            return Err(RunnerError::MissingTrace(trace_path));
        }

        Ok(read_trace_file(&trace_path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        let result = InstrumentedRunner::new(dir.path().join("no-such-binary"));
        assert!(matches!(result, Err(RunnerError::BinaryNotFound(_))));
    }

    #[test]
    fn test_trace_path_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("target.bin");
        std::fs::write(&binary, b"").unwrap();

        let runner = InstrumentedRunner::new(&binary)
            .unwrap()
            .with_working_dir(dir.path());
        assert_eq!(runner.trace_path(), dir.path().join(DEFAULT_TRACE_FILE));

        let absolute = dir.path().join("elsewhere/trace.csv");
        let runner = runner.with_trace_file(&absolute);
        assert_eq!(runner.trace_path(), absolute);
    }
}
