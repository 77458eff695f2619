//! Call frequency metrics over aggregated edges.
//!
//! Hot edges are the caller -> callee pairs exercised most often by the
//! selected input. They are the first thing to look at when triaging
//! coverage.

use crate::parser::schema::{NodeId, WeightedEdge};
use log::debug;
use serde::{Deserialize, Serialize};

/// A frequently taken call edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotEdge {
    pub source: String,
    pub target: String,

    /// Number of observed calls
    pub calls: u64,

    /// Percentage of all observed calls
    pub percentage: f64,
}

/// Calculate the hottest edges
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `edges` - Aggregated edges
/// * `total_calls` - Number of raw call records behind `edges`
/// * `top_n` - Number of edges to return
///
/// # Returns
/// At most `top_n` edges, sorted by call count (descending)
pub fn calculate_hot_edges<N: NodeId>(
    edges: &[WeightedEdge<N>],
    total_calls: u64,
    top_n: usize,
) -> Vec<HotEdge> {
    debug!("Calculating top {} hot edges from {} edges", top_n, edges.len());

    let mut ranked: Vec<&WeightedEdge<N>> = edges.iter().collect();
    ranked.sort_by(|a, b| {
        b.weight
            .cmp(&a.weight)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });

    ranked
        .into_iter()
        .take(top_n)
        .map(|edge| create_hot_edge(edge, total_calls))
        .collect()
}

/// Create a HotEdge from a WeightedEdge
///
/// **Private** - internal conversion
fn create_hot_edge<N: NodeId>(edge: &WeightedEdge<N>, total_calls: u64) -> HotEdge {
    let percentage = if total_calls > 0 {
        (edge.weight as f64 / total_calls as f64) * 100.0
    } else {
        0.0
    };

    HotEdge {
        source: edge.source.to_string(),
        target: edge.target.to_string(),
        calls: edge.weight,
        percentage,
    }
}

/// Calculate call distribution statistics
///
/// **Public** - provides summary statistics
pub fn calculate_call_distribution<N: NodeId>(edges: &[WeightedEdge<N>]) -> CallDistribution {
    if edges.is_empty() {
        return CallDistribution::default();
    }

    let mut weights: Vec<u64> = edges.iter().map(|e| e.weight).collect();
    weights.sort_unstable_by(|a, b| b.cmp(a));

    let total: u64 = weights.iter().sum();
    let count = weights.len();
    let mean = total / count as u64;
    let median = weights[count / 2];
    let self_calls = edges.iter().filter(|e| e.source == e.target).count();

    // Top 10% of edges
    let top_10_percent_count = (count as f64 * 0.1).ceil() as usize;
    let top_10_percent_calls: u64 = weights.iter().take(top_10_percent_count).sum();

    CallDistribution {
        total_calls: total,
        edge_count: count,
        self_call_edges: self_calls,
        mean_calls_per_edge: mean,
        median_calls_per_edge: median,
        max_calls: weights[0],
        top_10_percent_calls,
        top_10_percent_percentage: (top_10_percent_calls as f64 / total as f64) * 100.0,
    }
}

/// Call distribution statistics
///
/// **Public** - returned from calculate_call_distribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallDistribution {
    /// Total observed calls across all edges
    pub total_calls: u64,

    /// Number of distinct edges
    pub edge_count: usize,

    /// Edges whose caller is also the callee
    pub self_call_edges: usize,

    pub mean_calls_per_edge: u64,
    pub median_calls_per_edge: u64,
    pub max_calls: u64,

    /// Calls made over the top 10% of edges
    pub top_10_percent_calls: u64,

    /// Percentage of all calls made over the top 10% of edges
    pub top_10_percent_percentage: f64,
}

impl CallDistribution {
    /// Returns true if the top 10% of edges carry more than 80% of calls
    pub fn is_highly_concentrated(&self) -> bool {
        self.top_10_percent_percentage > 80.0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Calls: {} | Edges: {} | Self-calls: {} | Mean: {} | Median: {} | Max: {} | Top 10%: {:.1}%",
            self.total_calls,
            self.edge_count,
            self.self_call_edges,
            self.mean_calls_per_edge,
            self.median_calls_per_edge,
            self.max_calls,
            self.top_10_percent_percentage
        )
    }
}

/// Render hot edges as an aligned text table
///
/// **Public** - used by the `--summary` output
pub fn format_hot_edges(hot_edges: &[HotEdge]) -> String {
    if hot_edges.is_empty() {
        return "No calls recorded".to_string();
    }

    let mut out = String::from("Hottest call edges:\n");
    for (i, edge) in hot_edges.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:>8} calls ({:>5.1}%)  {} -> {}\n",
            i + 1,
            edge.calls,
            edge.percentage,
            edge.source,
            edge.target
        ));
    }
    out
}
