//! Graph command implementation.
//!
//! Builds a call graph from a trace CSV that is already on disk, without
//! running any binary:
//! 1. Reads the trace
//! 2. Aggregates and builds the graph
//! 3. Writes output files

use super::models::GraphArgs;
use super::pipeline::{build_graph, emit_outputs, validate_output_options};
use crate::graph::CallGraph;
use crate::parser::{read_trace_file, TraceSet};
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the graph command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The built call graph, after every requested output has been written
pub fn execute_graph(args: GraphArgs) -> Result<CallGraph> {
    let start_time = Instant::now();

    info!("Building call graph from trace: {}", args.trace.display());

    info!("Step 1/3: Reading call trace...");
    let records = read_trace_file(&args.trace)
        .with_context(|| format!("Failed to read trace {}", args.trace.display()))?;
    let trace: TraceSet = records.into_iter().collect();

    info!("Step 2/3: Aggregating call edges...");
    let graph = build_graph(trace)?;

    info!("Step 3/3: Writing output files...");
    let source = args.trace.display().to_string();
    emit_outputs(&source, &graph, &args.outputs)?;

    info!("Graph completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(graph)
}

/// Validate graph arguments
///
/// **Public** - can be called before execute_graph for early validation
pub fn validate_graph_args(args: &GraphArgs) -> Result<()> {
    if args.trace.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    if !args.trace.is_file() {
        anyhow::bail!("Trace file does not exist: {}", args.trace.display());
    }

    validate_output_options(&args.outputs)
}
