//! Aggregation of raw call records into weighted edges and metrics.
//!
//! This module transforms parsed call traces into:
//! - Weighted edges (one per distinct caller -> callee pair)
//! - Hot edge analysis (most frequent calls)
//! - Call distribution statistics

pub mod edge_counter;
pub mod metrics;

// Re-export main types and functions
pub use edge_counter::{aggregate, aggregate_fields};
pub use metrics::{
    calculate_call_distribution, calculate_hot_edges, format_hot_edges, CallDistribution, HotEdge,
};
