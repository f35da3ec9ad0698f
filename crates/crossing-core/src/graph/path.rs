//! Path reconstruction from predecessor vectors

use crate::error::{CrossingError, Result};
use crate::graph::algos::dijkstra::ShortestPathTree;
use crate::graph::types::{Hop, NodeId, PathOutcome, Route, INFINITY};

/// Walk `pred` backward from `target` and return the route in
/// source-to-target order, or `Unreachable` if `dist[target]` is infinite.
///
/// The walk ends at the first node without a predecessor, which for vectors
/// produced by the scheduler is the source.
pub fn reconstruct_path(
    dist: &[f64],
    pred: &[Option<NodeId>],
    target: NodeId,
) -> Result<PathOutcome> {
    if dist.len() != pred.len() {
        return Err(CrossingError::invalid_value(
            "predecessor vector",
            format!(
                "length {} does not match {} distances",
                pred.len(),
                dist.len()
            ),
        ));
    }
    if target >= dist.len() {
        return Err(CrossingError::TargetOutOfRange {
            node: target,
            node_count: dist.len(),
        });
    }

    let distance = dist[target];
    if distance == INFINITY {
        return Ok(PathOutcome::Unreachable);
    }

    let nodes = walk_back(target, pred.len(), |node| pred[node])?;
    Ok(PathOutcome::Reached(Route {
        distance,
        nodes,
        hops: Vec::new(),
    }))
}

/// Same walk over a tree, filling in per-hop weights and wait costs
pub(crate) fn reconstruct_from_tree(tree: &ShortestPathTree, target: NodeId) -> Result<PathOutcome> {
    let distance = tree.distance(target);
    if distance == INFINITY {
        return Ok(PathOutcome::Unreachable);
    }

    let nodes = walk_back(target, tree.node_count(), |node| tree.predecessor(node))?;
    let hops = nodes
        .windows(2)
        .filter_map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            tree.via(to).map(|via| Hop {
                from,
                to,
                weight: via.weight,
                wait: via.wait,
                arrival: tree.distance(to),
            })
        })
        .collect();

    Ok(PathOutcome::Reached(Route {
        distance,
        nodes,
        hops,
    }))
}

/// Collect `target` and its predecessors, reversed.
///
/// A chain longer than the node count can only come from a cycle.
fn walk_back(
    target: NodeId,
    node_count: usize,
    pred: impl Fn(NodeId) -> Option<NodeId>,
) -> Result<Vec<NodeId>> {
    let mut nodes = vec![target];
    let mut current = target;
    while let Some(previous) = pred(current) {
        if nodes.len() >= node_count {
            tracing::error!(target_node = target, at = previous, "predecessor_cycle");
            return Err(CrossingError::invalid_value(
                "predecessor chain",
                format!("cycle through node {}", previous),
            ));
        }
        nodes.push(previous);
        current = previous;
    }

    nodes.reverse();
    Ok(nodes)
}
