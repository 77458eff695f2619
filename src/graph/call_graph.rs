//! Weighted directed call graph built from aggregated edges.
//!
//! The graph is immutable once built. Nodes are stored in first-appearance
//! order (source before target), which is also the default row order of
//! extracted adjacency matrices.

use super::dot::DotGraph;
use super::matrix::SparseMatrix;
use crate::parser::schema::{NodeId, WeightedEdge};
use crate::utils::error::GraphError;
use clap::ValueEnum;
use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Node ordering returned alongside an adjacency matrix
pub type NodeList<N> = Vec<N>;

/// How rows and columns of an adjacency matrix are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NodeOrder {
    /// Order in which nodes first appear in the edge list
    #[default]
    FirstSeen,
    /// Ascending node identifier
    Sorted,
}

/// Directed call graph with call counts as edge weights
#[derive(Debug, Clone)]
pub struct CallGraph<N: NodeId = String> {
    graph: DiGraph<N, u64>,
    index: HashMap<N, NodeIndex>,
}

impl<N: NodeId> CallGraph<N> {
    /// Build a graph from weighted edges
    ///
    /// **Public** - main entry point for graph construction
    ///
    /// # Errors
    /// * `GraphError::DuplicateEdge` - two edges share the same `(source, target)`
    /// * `GraphError::ZeroWeight` - an edge with weight 0
    pub fn build<'a, I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = &'a WeightedEdge<N>>,
        N: 'a,
    {
        let mut call_graph = Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        };

        for edge in edges {
            if edge.weight == 0 {
                return Err(GraphError::ZeroWeight {
                    caller: edge.source.to_string(),
                    callee: edge.target.to_string(),
                });
            }

            let source = call_graph.ensure_node(&edge.source);
            let target = call_graph.ensure_node(&edge.target);

            if call_graph.graph.find_edge(source, target).is_some() {
                return Err(GraphError::DuplicateEdge {
                    caller: edge.source.to_string(),
                    callee: edge.target.to_string(),
                });
            }

            call_graph.graph.add_edge(source, target, edge.weight);
        }

        debug!(
            "Built call graph: {} nodes, {} edges",
            call_graph.node_count(),
            call_graph.edge_count()
        );

        Ok(call_graph)
    }

    /// Add a node or get existing node's index
    fn ensure_node(&mut self, id: &N) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(id.clone());
        self.index.insert(id.clone(), idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Sum of all edge weights (total observed calls)
    pub fn total_weight(&self) -> u64 {
        self.graph.edge_weights().sum()
    }

    /// Nodes in first-appearance order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Edges in insertion order
    pub fn edges(&self) -> Vec<WeightedEdge<N>> {
        self.graph
            .edge_references()
            .map(|e| {
                WeightedEdge::new(
                    self.graph[e.source()].clone(),
                    self.graph[e.target()].clone(),
                    *e.weight(),
                )
            })
            .collect()
    }

    /// Weight of the `source -> target` edge, if present
    pub fn edge_weight(&self, source: &N, target: &N) -> Option<u64> {
        let source = *self.index.get(source)?;
        let target = *self.index.get(target)?;
        let edge = self.graph.find_edge(source, target)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Extract the adjacency matrix in first-appearance node order
    ///
    /// Cell `(i, j)` holds the weight of `nodes[i] -> nodes[j]`, or 1 for any
    /// present edge when `use_weights` is false. The returned node list is the
    /// only valid key for the matrix.
    pub fn adjacency_matrix(&self, use_weights: bool) -> (NodeList<N>, SparseMatrix) {
        self.adjacency_matrix_ordered(use_weights, NodeOrder::FirstSeen)
    }

    /// Extract the adjacency matrix with an explicit node order
    pub fn adjacency_matrix_ordered(
        &self,
        use_weights: bool,
        order: NodeOrder,
    ) -> (NodeList<N>, SparseMatrix) {
        match order {
            NodeOrder::FirstSeen => self.extract(use_weights, self.graph.node_indices().collect()),
            NodeOrder::Sorted => self.adjacency_matrix_by(use_weights, |a, b| a.cmp(b)),
        }
    }

    /// Extract the adjacency matrix with nodes sorted by `compare`
    ///
    /// `compare` must be a total order for the result to be stable.
    pub fn adjacency_matrix_by<F>(
        &self,
        use_weights: bool,
        mut compare: F,
    ) -> (NodeList<N>, SparseMatrix)
    where
        F: FnMut(&N, &N) -> Ordering,
    {
        let mut order: Vec<NodeIndex> = self.graph.node_indices().collect();
        order.sort_by(|a, b| compare(&self.graph[*a], &self.graph[*b]));
        self.extract(use_weights, order)
    }

    fn extract(&self, use_weights: bool, order: Vec<NodeIndex>) -> (NodeList<N>, SparseMatrix) {
        // graph index -> matrix position
        let mut position = vec![0usize; self.graph.node_count()];
        for (pos, idx) in order.iter().enumerate() {
            position[idx.index()] = pos;
        }

        let triplets = self
            .graph
            .edge_references()
            .map(|e| {
                let value = if use_weights { *e.weight() } else { 1 };
                (position[e.source().index()], position[e.target().index()], value)
            })
            .collect();

        let nodes = order.iter().map(|idx| self.graph[*idx].clone()).collect();

        (nodes, SparseMatrix::from_triplets(order.len(), triplets))
    }

    /// Describe the graph for an external renderer
    ///
    /// Produces Graphviz DOT text; each edge is labelled with its weight.
    pub fn export_drawable(&self) -> DotGraph {
        DotGraph::from_graph(&self.graph)
    }
}
