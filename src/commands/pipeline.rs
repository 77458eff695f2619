//! Steps shared by the `run` and `graph` commands.

use super::models::OutputOptions;
use crate::aggregator::{calculate_call_distribution, calculate_hot_edges, format_hot_edges};
use crate::graph::CallGraph;
use crate::output::{
    render_dot, render_format, to_report, write_dot, write_report, write_temp_dot, MatrixSection,
};
use crate::parser::TraceSet;
use crate::utils::config::MAX_TOP_EDGES;
use anyhow::{Context, Result};
use log::{debug, info};

/// Validate output options
///
/// **Public** - called by the command validators
pub fn validate_output_options(options: &OutputOptions) -> Result<()> {
    if options.top_edges == 0 {
        anyhow::bail!("top_edges must be greater than 0");
    }

    if options.top_edges > MAX_TOP_EDGES {
        anyhow::bail!("top_edges is too large (max {})", MAX_TOP_EDGES);
    }

    for path in [&options.output_json, &options.output_dot, &options.render]
        .into_iter()
        .flatten()
    {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Output paths cannot be empty");
        }
    }

    if let Some(image) = &options.render {
        render_format(image)?;
    }

    Ok(())
}

/// Aggregate collected records and build the call graph
pub fn build_graph(trace: TraceSet) -> Result<CallGraph> {
    let total_records = trace.len();
    let edges = trace.aggregate();

    let distribution = calculate_call_distribution(&edges);
    info!(
        "Aggregated {} call records into {} edges",
        total_records,
        edges.len()
    );
    info!("Call distribution: {}", distribution.summary());
    if distribution.is_highly_concentrated() {
        info!("Most calls flow through a few hot edges; see the top edge list");
    }

    let graph = CallGraph::build(&edges).context("Failed to build call graph")?;

    debug!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Write every requested output for a built graph
///
/// Rendering without `--dot` goes through a scratch DOT file that is removed
/// once the image is produced.
pub fn emit_outputs(source: &str, graph: &CallGraph, options: &OutputOptions) -> Result<()> {
    if let Some(json_path) = &options.output_json {
        let matrix = options
            .include_matrix
            .then(|| MatrixSection::from_graph(graph, options.weighted, options.node_order));

        if let Some(section) = &matrix {
            debug!(
                "Adjacency matrix: {}x{}, {} stored cells",
                section.matrix.dim(),
                section.matrix.dim(),
                section.matrix.nnz()
            );
        }

        let report = to_report(source, graph, options.top_edges, matrix);
        write_report(&report, json_path).context("Failed to write graph report")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    if options.output_dot.is_some() || options.render.is_some() {
        let dot = graph.export_drawable();

        if let Some(dot_path) = &options.output_dot {
            write_dot(&dot, dot_path).context("Failed to write DOT graph")?;
            info!("✓ DOT graph written to: {}", dot_path.display());
        }

        if let Some(image) = &options.render {
            match &options.output_dot {
                Some(dot_path) => {
                    render_dot(dot_path, image).context("Failed to render call graph")?;
                }
                None => {
                    let scratch =
                        write_temp_dot(&dot, image).context("Failed to write DOT graph")?;
                    render_dot(scratch.path(), image).context("Failed to render call graph")?;
                }
            }
            info!("✓ Call graph rendered to: {}", image.display());
        }
    }

    if options.print_summary {
        print_summary(source, graph, options.top_edges);
    }

    Ok(())
}

fn print_summary(source: &str, graph: &CallGraph, top_edges: usize) {
    let edges = graph.edges();
    let hot_edges = calculate_hot_edges(&edges, graph.total_weight(), top_edges.min(10));

    println!("\n{}", "=".repeat(80));
    println!("CALL GRAPH SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Source:      {}", source);
    println!("Functions:   {}", graph.node_count());
    println!("Call edges:  {}", graph.edge_count());
    println!("Total calls: {}", graph.total_weight());
    println!("\n{}", format_hot_edges(&hot_edges));
    println!("{}", "=".repeat(80));
}
