//! Adjacency-list graph store
//!
//! Nodes are implicit dense ids in `[0, n)`. Edges are appended to the
//! adjacency list of their source node and never removed.

use crate::error::{CrossingError, Result};
use crate::graph::types::{Edge, NodeId};

/// Directed graph with non-negative edge weights
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
    expected_edges: usize,
}

impl Graph {
    /// Allocate an empty graph with `node_count` nodes
    pub fn new(node_count: usize) -> Result<Self> {
        Self::with_expected_edges(node_count, 0)
    }

    /// Allocate an empty graph, recording the announced edge count.
    ///
    /// `expected_edges` is informational and never enforced.
    pub fn with_expected_edges(node_count: usize, expected_edges: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(CrossingError::InvalidSize { nodes: 0 });
        }

        Ok(Graph {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
            expected_edges,
        })
    }

    /// Append a directed edge to `src`'s adjacency list
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId, weight: f64) -> Result<()> {
        let node_count = self.node_count();
        for node in [src, dst] {
            if node >= node_count {
                return Err(CrossingError::out_of_range(node, node_count));
            }
        }

        let edge = Edge::new(src, dst, weight);
        if !weight.is_finite() || weight < 0.0 {
            return Err(CrossingError::invalid_weight(edge, weight));
        }

        self.adjacency[src].push(edge);
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `node` in insertion order.
    ///
    /// Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges actually inserted
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edge count announced at construction
    pub fn expected_edges(&self) -> usize {
        self.expected_edges
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.node_count()
    }

    /// The highest node id, the default target of a two-terminal query
    pub fn last_node(&self) -> NodeId {
        self.node_count() - 1
    }

    /// All edges, grouped by source node, each group in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flatten()
    }
}

/// Build a graph from `(src, dst, weight)` triples
pub fn build_graph<I>(node_count: usize, edges: I) -> Result<Graph>
where
    I: IntoIterator<Item = (NodeId, NodeId, f64)>,
{
    let edges = edges.into_iter();
    let mut graph = Graph::with_expected_edges(node_count, edges.size_hint().0)?;
    for (src, dst, weight) in edges {
        graph.add_edge(src, dst, weight)?;
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "build_graph"
    );
    Ok(graph)
}
