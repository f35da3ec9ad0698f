//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::{NodeId, WaitPolicy};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "crossing.toml";

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Wait cost charged at intersections
    #[serde(default)]
    pub wait: WaitPolicy,

    /// Default query endpoints
    #[serde(default)]
    pub query: QueryConfig,

    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default endpoints for point-to-point queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Source node (0 when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<NodeId>,

    /// Target node (the highest node id when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeId>,
}

/// Output rendering options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Fixed number of decimal places for distances in human output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}
