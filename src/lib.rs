//! Call Trace Studio
//!
//! Dynamic call graph construction for binaries under test.
//!
//! An instrumented binary is run against a test input and writes a CSV
//! trace of caller -> callee events. This crate aggregates that trace into
//! a weighted directed call graph and derives an adjacency matrix or a DOT
//! description for rendering.
//!
//! ```ignore
//! use call_trace_studio::aggregator::aggregate;
//! use call_trace_studio::graph::CallGraph;
//! use call_trace_studio::parser::read_trace_file;
//!
//! let records = read_trace_file("callgraph.csv")?;
//! let graph = CallGraph::build(&aggregate(&records))?;
//! let (nodes, matrix) = graph.adjacency_matrix(true);
//! ```

pub mod aggregator;
pub mod commands;
pub mod graph;
pub mod output;
pub mod parser;
pub mod runner;
pub mod utils;
