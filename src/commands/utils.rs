use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a graph report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.edges.len() != report.edge_count {
        anyhow::bail!(
            "edge_count is {} but {} edges are listed",
            report.edge_count,
            report.edges.len()
        );
    }

    let listed_calls: u64 = report.edges.iter().map(|e| e.weight).sum();
    if listed_calls != report.total_calls {
        anyhow::bail!(
            "total_calls is {} but edge weights sum to {}",
            report.total_calls,
            listed_calls
        );
    }

    if let Some(section) = &report.matrix {
        if !section.matrix.is_well_formed() || section.nodes.len() != section.matrix.dim() {
            anyhow::bail!("Adjacency matrix is malformed");
        }
        if section.nodes.len() != report.node_count {
            anyhow::bail!(
                "Matrix covers {} nodes but node_count is {}",
                section.nodes.len(),
                report.node_count
            );
        }

        let (expected, label) = if section.weighted {
            (report.total_calls, "total_calls")
        } else {
            (report.edge_count as u64, "edge_count")
        };
        if section.matrix.sum() != expected {
            anyhow::bail!(
                "Matrix cells sum to {} but {} is {}",
                section.matrix.sum(),
                label,
                expected
            );
        }
    }

    println!("✓ Valid graph report");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Functions: {}", report.node_count);
    println!("  Call edges: {}", report.edge_count);
    println!("  Total calls: {}", report.total_calls);
    println!("  Hot edges: {}", report.hot_edges.len());
    match &report.matrix {
        Some(section) => println!(
            "  Matrix: {}x{} ({}, {} stored cells)",
            section.matrix.shape().0,
            section.matrix.shape().1,
            if section.weighted { "weighted" } else { "unweighted" },
            section.matrix.nnz()
        ),
        None => println!("  Matrix: not included"),
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Call Trace Studio Graph Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string        - Schema version (e.g., '1.0.0')");
        println!("  source: string         - Test input(s) or trace file");
        println!("  node_count: number     - Distinct functions");
        println!("  edge_count: number     - Distinct caller -> callee pairs");
        println!("  total_calls: number    - Raw call records aggregated");
        println!("  edges: array           - Every edge");
        println!("    source: string       - Caller");
        println!("    target: string       - Callee");
        println!("    weight: number       - Times the call was observed");
        println!("  hot_edges: array       - Most frequent edges");
        println!("    calls: number        - Times the call was observed");
        println!("    percentage: number   - Share of total calls");
        println!("  matrix: object?        - Adjacency matrix (if requested)");
        println!("    weighted: bool       - Counts (true) or 0/1 indicators");
        println!("    node_order: string   - 'first-seen' or 'sorted'");
        println!("    nodes: array         - Row/column labels");
        println!("    matrix: object       - CSR: dim, indptr, indices, data");
        println!("  generated_at: string   - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Call Trace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Dynamic call graphs from instrumented binary call traces.");
}
