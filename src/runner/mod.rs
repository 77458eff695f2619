//! Instrumented binary execution.
//!
//! This module handles:
//! - Enumerating and selecting test inputs
//! - Running the instrumented binary and reading back its trace
//! - Cleaning up transient artifacts

pub mod artifacts;
pub mod inputs;
pub mod process;

// Re-export main types
pub use artifacts::ArtifactGuard;
pub use inputs::{enumerate_test_inputs, select_inputs, InputSelection};
pub use process::InstrumentedRunner;
