//! Record and edge types shared by the parser, aggregator and graph.
//!
//! Node identifiers are opaque: they are hashed, compared and printed,
//! never interpreted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Bounds a type must satisfy to identify a call graph node
///
/// Implemented for every type that is hashable, totally ordered and printable
/// (`String`, `&str`, integer addresses, ...).
pub trait NodeId: Clone + Eq + Hash + Ord + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + fmt::Display {}

/// One observed caller -> callee event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallRecord<N = String> {
    /// Calling function
    pub source: N,

    /// Called function
    pub target: N,
}

impl<N> CallRecord<N> {
    pub fn new(source: N, target: N) -> Self {
        Self { source, target }
    }
}

impl<N> From<(N, N)> for CallRecord<N> {
    fn from((source, target): (N, N)) -> Self {
        Self::new(source, target)
    }
}

/// A distinct call edge and the number of times it was observed
///
/// Weights produced by aggregation are always >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge<N = String> {
    pub source: N,
    pub target: N,
    pub weight: u64,
}

impl<N> WeightedEdge<N> {
    pub fn new(source: N, target: N, weight: u64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<N: fmt::Display> fmt::Display for WeightedEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

/// Ordered collection of call records gathered across one or more runs
///
/// Records are only appended; grouping happens once, when the set is
/// consumed by [`TraceSet::aggregate`].
#[derive(Debug, Clone)]
pub struct TraceSet<N = String> {
    records: Vec<CallRecord<N>>,
}

impl<N> Default for TraceSet<N> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<N: NodeId> TraceSet<N> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append the records of one run
    pub fn extend<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = CallRecord<N>>,
    {
        self.records.extend(records);
    }

    pub fn push(&mut self, record: CallRecord<N>) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CallRecord<N>] {
        &self.records
    }

    /// Group the collected records into weighted edges
    pub fn aggregate(self) -> Vec<WeightedEdge<N>> {
        crate::aggregator::aggregate(&self.records)
    }
}

impl<N: NodeId> FromIterator<CallRecord<N>> for TraceSet<N> {
    fn from_iter<I: IntoIterator<Item = CallRecord<N>>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
