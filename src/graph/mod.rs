//! Call graph construction and derived views.
//!
//! This module provides:
//! - `CallGraph` - immutable weighted digraph built from aggregated edges
//! - Adjacency matrix extraction in CSR form
//! - DOT export for external renderers

pub mod call_graph;
pub mod dot;
pub mod matrix;

// Re-export main types
pub use call_graph::{CallGraph, NodeList, NodeOrder};
pub use dot::DotGraph;
pub use matrix::SparseMatrix;
