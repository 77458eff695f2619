//! Trace parsing and shared record types.
//!
//! This module handles:
//! - Reading the raw CSV call trace
//! - Validating trace rows
//! - Defining record and edge types

pub mod schema;
pub mod trace_csv;

// Re-export main types
pub use schema::{CallRecord, NodeId, TraceSet, WeightedEdge};
pub use trace_csv::{parse_trace, read_trace_file};
