//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod graph;
pub mod models;
pub mod pipeline;
pub mod run;
pub mod utils;

// Re-export main command functions
pub use graph::{execute_graph, validate_graph_args};
pub use models::{GraphArgs, OutputOptions, RunArgs};
pub use run::{execute_run, validate_run_args};
pub use utils::{display_schema, display_version, validate_report_file};
