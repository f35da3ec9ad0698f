//! Graph documents
//!
//! A graph document is a serde-described file holding the node count and the
//! edge list. Files ending in `.json` are read as JSON, everything else as
//! TOML:
//!
//! ```toml
//! nodes = 3
//!
//! [[edges]]
//! src = 0
//! dst = 1
//! weight = 1.5
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CrossingError, Result};
use crate::graph::{Graph, NodeId};

/// One edge as written in a document.
///
/// Ids are signed so that negative ids are reported as out of range instead
/// of failing to decode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub src: i64,
    pub dst: i64,
    pub weight: f64,
}

/// A graph as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Node count; ids run from 0 to `nodes - 1`
    pub nodes: i64,

    /// Announced edge count, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_edges: Option<usize>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Read a document, choosing the decoder by file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let document: GraphDocument = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Ok(document)
    }

    /// Validate the document and build the graph
    pub fn into_graph(self) -> Result<Graph> {
        let node_count = match usize::try_from(self.nodes) {
            Ok(count) if count > 0 => count,
            _ => return Err(CrossingError::InvalidSize { nodes: self.nodes }),
        };

        if let Some(expected) = self.expected_edges {
            if expected != self.edges.len() {
                tracing::warn!(
                    expected,
                    actual = self.edges.len(),
                    "edge count differs from announced count"
                );
            }
        }

        let expected = self.expected_edges.unwrap_or(self.edges.len());
        let mut graph = Graph::with_expected_edges(node_count, expected)?;
        for edge in &self.edges {
            let src = node_id(edge.src, node_count)?;
            let dst = node_id(edge.dst, node_count)?;
            graph.add_edge(src, dst, edge.weight)?;
        }
        Ok(graph)
    }
}

impl From<&Graph> for GraphDocument {
    fn from(graph: &Graph) -> Self {
        GraphDocument {
            nodes: i64::try_from(graph.node_count()).unwrap_or(i64::MAX),
            expected_edges: Some(graph.edge_count()),
            edges: graph
                .edges()
                .map(|edge| EdgeSpec {
                    src: edge.src as i64,
                    dst: edge.dst as i64,
                    weight: edge.weight,
                })
                .collect(),
        }
    }
}

fn node_id(raw: i64, node_count: usize) -> Result<NodeId> {
    usize::try_from(raw)
        .ok()
        .filter(|&id| id < node_count)
        .ok_or_else(|| CrossingError::out_of_range(raw, node_count))
}

/// Load a document and build its graph
pub fn load_graph(path: &Path) -> Result<Graph> {
    let start = std::time::Instant::now();
    let graph = GraphDocument::load(path)?.into_graph()?;
    crate::trace_time!(start, "load_graph", nodes = graph.node_count());
    Ok(graph)
}
