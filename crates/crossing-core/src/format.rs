//! Output format handling for crossing
//!
//! - human: distance on one line, space-separated path on the next,
//!   or `unreachable`
//! - json: stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_usage;
use crate::error::CrossingError;
use crate::graph::{PathOutcome, ShortestPathTree};

/// Marker printed when the target cannot be reached
pub const UNREACHABLE: &str = "unreachable";

/// Output format for crossing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = CrossingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => bail_usage!(format!(
                "unknown format: {} (expected: human or json)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Format a cost: fixed decimals if `precision` is set, otherwise the
/// shortest exact form with at least one decimal (`8.0`, `2.5`), `inf` for
/// unreached nodes
pub fn format_cost(value: f64, precision: Option<usize>) -> String {
    if value.is_infinite() {
        return "inf".to_string();
    }
    match precision {
        Some(places) => format!("{:.*}", places, value),
        None if value.fract() == 0.0 => format!("{:.1}", value),
        None => format!("{}", value),
    }
}

/// Human rendering of a point-to-point outcome
pub fn render_route(outcome: &PathOutcome, precision: Option<usize>) -> String {
    match outcome {
        PathOutcome::Unreachable => UNREACHABLE.to_string(),
        PathOutcome::Reached(route) => {
            let path = route
                .nodes
                .iter()
                .map(|node| node.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}\n{}", format_cost(route.distance, precision), path)
        }
    }
}

/// Human rendering of a full tree: `node distance predecessor` per line,
/// `-` for a missing predecessor
pub fn render_tree(tree: &ShortestPathTree, precision: Option<usize>) -> String {
    (0..tree.node_count())
        .map(|node| {
            let pred = tree
                .predecessor(node)
                .map_or_else(|| "-".to_string(), |p| p.to_string());
            format!(
                "{} {} {}",
                node,
                format_cost(tree.distance(node), precision),
                pred
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One node of a tree in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct TreeRow {
    pub node: usize,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<usize>,
}

/// JSON rendering of a full tree
pub fn tree_to_json(tree: &ShortestPathTree) -> serde_json::Value {
    let rows: Vec<TreeRow> = (0..tree.node_count())
        .map(|node| TreeRow {
            node,
            reachable: tree.is_reachable(node),
            distance: tree.is_reachable(node).then(|| tree.distance(node)),
            predecessor: tree.predecessor(node),
        })
        .collect();

    serde_json::json!({
        "source": tree.source(),
        "nodes": rows,
        "stats": tree.stats(),
    })
}
