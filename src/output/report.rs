//! JSON graph report schema.
//!
//! This is the structure written to disk by `--output`. The schema is
//! versioned so later releases can evolve it.

use crate::aggregator::metrics::{calculate_hot_edges, HotEdge};
use crate::graph::{CallGraph, NodeOrder, SparseMatrix};
use crate::parser::schema::WeightedEdge;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the trace came from (test input or trace file)
    pub source: String,

    pub node_count: usize,
    pub edge_count: usize,

    /// Number of raw call records behind the graph
    pub total_calls: u64,

    /// Every edge with its call count
    pub edges: Vec<WeightedEdge>,

    /// Most frequent edges
    pub hot_edges: Vec<HotEdge>,

    /// Adjacency matrix, omitted when not requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<MatrixSection>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Adjacency matrix plus the node order needed to read it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixSection {
    /// Cells hold call counts when true, 0/1 indicators otherwise
    pub weighted: bool,
    pub node_order: NodeOrder,

    /// Row/column labels; `nodes[i]` is row and column `i`
    pub nodes: Vec<String>,
    pub matrix: SparseMatrix,
}

impl MatrixSection {
    /// Extract a matrix section from a graph
    pub fn from_graph(graph: &CallGraph, weighted: bool, node_order: NodeOrder) -> Self {
        let (nodes, matrix) = graph.adjacency_matrix_ordered(weighted, node_order);
        Self {
            weighted,
            node_order,
            nodes,
            matrix,
        }
    }
}

/// Assemble the report for a built graph
///
/// **Public** - used by commands to create final output
pub fn to_report(
    source: &str,
    graph: &CallGraph,
    top_edges: usize,
    matrix: Option<MatrixSection>,
) -> GraphReport {
    use chrono::Utc;

    let edges = graph.edges();
    let total_calls = graph.total_weight();

    GraphReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        total_calls,
        hot_edges: calculate_hot_edges(&edges, total_calls, top_edges),
        edges,
        matrix,
        generated_at: Utc::now().to_rfc3339(),
    }
}
