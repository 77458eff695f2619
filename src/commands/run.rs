//! Run command implementation.
//!
//! The run command:
//! 1. Enumerates and selects test inputs
//! 2. Runs the instrumented binary on each selected input
//! 3. Aggregates the collected trace into a call graph
//! 4. Writes output files and removes transient artifacts

use super::models::RunArgs;
use super::pipeline::{build_graph, emit_outputs, validate_output_options};
use crate::graph::CallGraph;
use crate::parser::TraceSet;
use crate::runner::{enumerate_test_inputs, select_inputs, ArtifactGuard, InstrumentedRunner};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the run command
///
/// **Public** - main entry point called from main.rs
///
/// Inputs run one after another; their traces are collected into a single
/// trace set and aggregated once.
///
/// # Errors
/// * Missing binary or input directory
/// * Input index out of range
/// * Instrumented runs that leave no (or a malformed) trace
/// * File write errors
pub fn execute_run(args: RunArgs) -> Result<CallGraph> {
    let start_time = Instant::now();

    info!("Starting instrumented run of: {}", args.binary.display());

    // Step 1: Select inputs
    info!("Step 1/4: Selecting test inputs...");
    let available = enumerate_test_inputs(&args.inputs_dir).context("Failed to list test inputs")?;
    let selected = select_inputs(&available, args.selection, &args.inputs_dir)?;
    debug!("Selected {} of {} inputs", selected.len(), available.len());

    let runner = InstrumentedRunner::new(&args.binary)?
        .with_flags(args.flags.clone())
        .with_trace_file(&args.trace_file)
        .with_working_dir(&args.working_dir);

    let mut artifacts = ArtifactGuard::new(args.keep_artifacts);
    artifacts.track(runner.trace_path());

    // Step 2: Collect traces
    info!("Step 2/4: Running {} input(s)...", selected.len());
    let mut trace = TraceSet::new();
    for input in &selected {
        let records = runner
            .run(input)
            .with_context(|| format!("Instrumented run failed on {}", input.display()))?;
        debug!("{}: {} call records", input.display(), records.len());
        trace.extend(records);
    }

    // Step 3: Aggregate
    info!("Step 3/4: Aggregating {} call records...", trace.len());
    let graph = build_graph(trace)?;

    // Step 4: Outputs
    info!("Step 4/4: Writing output files...");
    let source = describe_inputs(&selected);
    emit_outputs(&source, &graph, &args.outputs)?;

    info!("Run completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(graph)
}

/// Validate run arguments
///
/// **Public** - can be called before execute_run for early validation
pub fn validate_run_args(args: &RunArgs) -> Result<()> {
    if args.binary.as_os_str().is_empty() {
        anyhow::bail!("Binary path cannot be empty");
    }

    if !args.binary.exists() {
        anyhow::bail!("Binary path does not exist: {}", args.binary.display());
    }

    if args.inputs_dir.as_os_str().is_empty() {
        anyhow::bail!("Test inputs path cannot be empty");
    }

    if !args.inputs_dir.is_dir() {
        anyhow::bail!("Test inputs path is not a directory: {}", args.inputs_dir.display());
    }

    if args.trace_file.as_os_str().is_empty() {
        anyhow::bail!("Trace file path cannot be empty");
    }

    validate_output_options(&args.outputs)
}

/// Label for the report's `source` field
fn describe_inputs(inputs: &[std::path::PathBuf]) -> String {
    match inputs {
        [single] => single.display().to_string(),
        many => format!("{} inputs", many.len()),
    }
}
