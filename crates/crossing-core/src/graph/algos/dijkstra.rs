use crate::error::{CrossingError, Result};
use crate::graph::path::reconstruct_from_tree;
use crate::graph::store::Graph;
use crate::graph::types::{NodeId, PathOutcome, INFINITY};
use crate::graph::wait::{WaitContext, WaitCost};
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Frontier entry: a node together with the distance it was pushed with.
///
/// Ordered by cost, ties broken by lower node id, so that wrapped in
/// `Reverse` a max-heap pops the cheapest, lowest-id entry first.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub cost: f64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Min-priority frontier with lazy deletion.
///
/// A node is pushed again on every improvement instead of being updated in
/// place. Entries whose cost no longer matches the live distance are stale
/// and skipped on pop.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    stale: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, cost: f64) {
        self.heap.push(Reverse(FrontierEntry { node, cost }));
    }

    /// Pop the cheapest entry that is still current in `dist`
    pub fn pop_live(&mut self, dist: &[f64]) -> Option<FrontierEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if entry.cost == dist[entry.node] {
                return Some(entry);
            }
            self.stale += 1;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of stale entries discarded so far
    pub fn stale_count(&self) -> usize {
        self.stale
    }
}

/// The edge and wait cost through which a node was last improved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Via {
    pub from: NodeId,
    pub weight: f64,
    pub wait: f64,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped with a live entry and expanded (or the target)
    pub settled: usize,
    /// Successful relaxations (frontier insertions)
    pub relaxed: usize,
    /// Stale entries discarded
    pub stale: usize,
    /// Whether the search stopped at the target
    pub stopped_at_target: bool,
}

/// Distance and predecessor vectors produced by one search
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: NodeId,
    target: Option<NodeId>,
    dist: Vec<f64>,
    pred: Vec<Option<NodeId>>,
    via: Vec<Option<Via>>,
    stats: SearchStats,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    pub fn distances(&self) -> &[f64] {
        &self.dist
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.pred
    }

    pub fn distance(&self, node: NodeId) -> f64 {
        self.dist.get(node).copied().unwrap_or(INFINITY)
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.pred.get(node).copied().flatten()
    }

    pub fn via(&self, node: NodeId) -> Option<Via> {
        self.via.get(node).copied().flatten()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node) < INFINITY
    }

    /// Nodes with a finite distance, in id order
    pub fn reached(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.dist.len()).filter(|&node| self.is_reachable(node))
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn node_count(&self) -> usize {
        self.dist.len()
    }

    /// Reconstruct the route to `target`, with per-hop detail
    pub fn route_to(&self, target: NodeId) -> Result<PathOutcome> {
        if target >= self.node_count() {
            return Err(CrossingError::TargetOutOfRange {
                node: target,
                node_count: self.node_count(),
            });
        }
        reconstruct_from_tree(self, target)
    }
}

/// Single-source shortest paths with per-traversal wait costs.
///
/// Label-setting Dijkstra: every relaxation of `u -> v` costs
/// `dist[u] + weight + wait`, where `wait` comes from the policy. With a
/// `target`, the search stops as soon as the target is popped; its distance
/// is final at that point while other distances may still be upper bounds.
/// Without a target the whole reachable graph is settled.
///
/// Edge weights and wait costs must be finite. A route whose total cost
/// exceeds `f64::MAX` fails with `InvalidValue` instead of being reported as
/// unreachable.
#[tracing::instrument(skip(graph, wait), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn shortest_path_tree<W>(
    graph: &Graph,
    source: NodeId,
    target: Option<NodeId>,
    wait: &W,
) -> Result<ShortestPathTree>
where
    W: WaitCost + ?Sized,
{
    let node_count = graph.node_count();
    if source >= node_count {
        return Err(CrossingError::SourceOutOfRange {
            node: source,
            node_count,
        });
    }
    if let Some(target) = target.filter(|&t| t >= node_count) {
        return Err(CrossingError::TargetOutOfRange {
            node: target,
            node_count,
        });
    }

    let mut dist = vec![INFINITY; node_count];
    let mut pred: Vec<Option<NodeId>> = vec![None; node_count];
    let mut via: Vec<Option<Via>> = vec![None; node_count];
    let mut stats = SearchStats::default();
    let mut frontier = Frontier::new();

    dist[source] = 0.0;
    frontier.push(source, 0.0);

    while let Some(FrontierEntry { node: u, cost }) = frontier.pop_live(&dist) {
        stats.settled += 1;

        if Some(u) == target {
            stats.stopped_at_target = true;
            break;
        }

        for edge in graph.neighbors(u) {
            let arrival = cost + edge.weight;
            let extra = wait.wait_cost(&WaitContext {
                node: u,
                edge,
                departure: cost,
                arrival,
            });
            if !extra.is_finite() || extra < 0.0 {
                return Err(CrossingError::invalid_weight(
                    format_args!("wait cost at node {} for {}", u, edge),
                    extra,
                ));
            }

            let candidate = arrival + extra;
            if !candidate.is_finite() {
                return Err(CrossingError::invalid_value(
                    "route cost",
                    format_args!("overflows f64 past {}", edge),
                ));
            }

            let v = edge.dst;
            if candidate < dist[v] {
                dist[v] = candidate;
                pred[v] = Some(u);
                via[v] = Some(Via {
                    from: u,
                    weight: edge.weight,
                    wait: extra,
                });
                frontier.push(v, candidate);
                stats.relaxed += 1;
            }
        }
    }

    stats.stale = frontier.stale_count();
    tracing::debug!(
        source,
        target = ?target,
        settled = stats.settled,
        relaxed = stats.relaxed,
        stale = stats.stale,
        stopped_at_target = stats.stopped_at_target,
        "shortest_path_tree"
    );

    Ok(ShortestPathTree {
        source,
        target,
        dist,
        pred,
        via,
        stats,
    })
}

/// Point-to-point query: shortest route from `source` to `target`
pub fn shortest_path<W>(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    wait: &W,
) -> Result<PathOutcome>
where
    W: WaitCost + ?Sized,
{
    let tree = shortest_path_tree(graph, source, Some(target), wait)?;
    tree.route_to(target)
}
