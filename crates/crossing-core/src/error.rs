//! Error types and exit codes for crossing
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, decoding)
//! - 2: Usage error (bad flags, bad query ids, bad configuration values)
//! - 3: Data error (malformed graph definition)

mod macros;

use thiserror::Error;

use crate::graph::NodeId;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug)]
pub enum CrossingError {
    // Data errors (exit code 3)
    #[error("invalid graph size: {nodes} (a graph needs at least one node)")]
    InvalidSize { nodes: i64 },

    #[error("node {node} out of range (graph has {node_count} nodes)")]
    OutOfRange { node: i64, node_count: usize },

    #[error("invalid weight {weight} on {context} (weights must be non-negative)")]
    InvalidWeight { context: String, weight: f64 },

    // Usage errors (exit code 2)
    #[error("source node {node} out of range (graph has {node_count} nodes)")]
    SourceOutOfRange { node: NodeId, node_count: usize },

    #[error("target node {node} out of range (graph has {node_count} nodes)")]
    TargetOutOfRange { node: NodeId, node_count: usize },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl CrossingError {
    /// Create an error for a negative or NaN weight
    pub fn invalid_weight(context: impl std::fmt::Display, weight: f64) -> Self {
        CrossingError::InvalidWeight {
            context: context.to_string(),
            weight,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CrossingError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node id that does not fit the graph
    pub fn out_of_range(node: impl TryInto<i64>, node_count: usize) -> Self {
        CrossingError::OutOfRange {
            node: node.try_into().unwrap_or(i64::MAX),
            node_count,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CrossingError::InvalidSize { .. }
            | CrossingError::OutOfRange { .. }
            | CrossingError::InvalidWeight { .. } => ExitCode::Data,

            CrossingError::SourceOutOfRange { .. }
            | CrossingError::TargetOutOfRange { .. }
            | CrossingError::InvalidValue { .. }
            | CrossingError::UsageError(_) => ExitCode::Usage,

            CrossingError::Io(_)
            | CrossingError::Json(_)
            | CrossingError::Toml(_)
            | CrossingError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CrossingError::InvalidSize { .. } => "invalid_size",
            CrossingError::OutOfRange { .. } => "out_of_range",
            CrossingError::InvalidWeight { .. } => "invalid_weight",
            CrossingError::SourceOutOfRange { .. } => "source_out_of_range",
            CrossingError::TargetOutOfRange { .. } => "target_out_of_range",
            CrossingError::InvalidValue { .. } => "invalid_value",
            CrossingError::UsageError(_) => "usage_error",
            CrossingError::Io(_) => "io_error",
            CrossingError::Json(_) => "json_error",
            CrossingError::Toml(_) => "toml_error",
            CrossingError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for crossing operations
pub type Result<T> = std::result::Result<T, CrossingError>;
