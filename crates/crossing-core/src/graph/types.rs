use serde::{Deserialize, Serialize};

/// Dense node identifier, valid iff `id < node_count`
pub type NodeId = usize;

/// Distance of a node that has not been reached
pub const INFINITY: f64 = f64::INFINITY;

/// A directed, weighted edge `src -> dst`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub src: NodeId,
    pub dst: NodeId,
    pub weight: f64,
}

impl Edge {
    pub fn new(src: NodeId, dst: NodeId, weight: f64) -> Self {
        Edge { src, dst, weight }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "edge {} -> {}", self.src, self.dst)
    }
}

impl From<(NodeId, NodeId, f64)> for Edge {
    fn from((src, dst, weight): (NodeId, NodeId, f64)) -> Self {
        Edge { src, dst, weight }
    }
}

/// One traversed edge of a route
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hop {
    pub from: NodeId,
    pub to: NodeId,
    /// Base weight of the traversed edge
    pub weight: f64,
    /// Wait cost charged for the traversal
    pub wait: f64,
    /// Total cost from the source on reaching `to`
    pub arrival: f64,
}

/// A source-to-target route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub distance: f64,
    /// Nodes in source-to-target order
    pub nodes: Vec<NodeId>,
    /// Per-hop detail. Empty when rebuilt from bare distance/predecessor vectors.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hops: Vec<Hop>,
}

impl Route {
    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of traversed edges
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of a point-to-point query
///
/// An unreachable target is a legitimate topology outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    Reached(Route),
    Unreachable,
}

impl PathOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            PathOutcome::Reached(route) => Some(route),
            PathOutcome::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, PathOutcome::Reached(_))
    }

    pub fn distance(&self) -> f64 {
        self.route().map_or(INFINITY, |route| route.distance)
    }
}
