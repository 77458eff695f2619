//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or aggregating call trace records
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV decoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Trace header must name exactly `source` and `target`, found: {0}")]
    InvalidHeader(String),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Unsupported {column} value at line {line}: {reason}")]
    UnsupportedType {
        line: u64,
        column: &'static str,
        reason: String,
    },
}

/// Errors raised when a call graph is built from a caller-supplied edge list
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate edge {caller} -> {callee}")]
    DuplicateEdge { caller: String, callee: String },

    #[error("Edge {caller} -> {callee} has zero weight")]
    ZeroWeight { caller: String, callee: String },
}

/// Errors that can occur while running the instrumented binary
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Binary path does not exist: {0}")]
    BinaryNotFound(PathBuf),

    #[error("Test inputs path does not exist: {0}")]
    InputsNotFound(PathBuf),

    #[error("No test inputs found in {0}")]
    NoInputs(PathBuf),

    #[error("Test input index {index} out of range ({available} inputs available)")]
    InputIndexOutOfRange { index: usize, available: usize },

    #[error("Failed to enumerate test inputs: {0}")]
    Enumeration(#[from] walkdir::Error),

    #[error("Failed to launch {binary}: {error}")]
    SpawnFailed {
        binary: PathBuf,
        error: std::io::Error,
    },

    #[error("Instrumented run did not produce a trace at {0}")]
    MissingTrace(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Graph rendering failed: {0}")]
    RenderFailed(String),
}
