//! Graphviz DOT export.
//!
//! The DOT text is the hand-off point to external renderers: node labels
//! carry node identities and edge labels carry call counts.

use petgraph::dot::Dot;
use petgraph::graph::DiGraph;
use std::fmt;

/// DOT description of a call graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGraph(String);

impl DotGraph {
    pub(crate) fn from_graph<N: fmt::Display>(graph: &DiGraph<N, u64>) -> Self {
        Self(format!("{}", Dot::new(graph)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DotGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
