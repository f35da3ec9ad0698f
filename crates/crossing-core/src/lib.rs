//! Crossing Core Library
//!
//! Shortest routes through directed road graphs where every intersection may
//! add a wait cost on top of the edge weight.
//!
//! ```
//! use crossing_core::graph::{build_graph, shortest_path, ConstantWait};
//!
//! let graph = build_graph(2, [(0, 1, 3.0)])?;
//! let outcome = shortest_path(&graph, 0, 1, &ConstantWait(5.0))?;
//! assert_eq!(outcome.distance(), 8.0);
//! # Ok::<(), crossing_core::error::CrossingError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

pub use error::{CrossingError, Result};
pub use graph::{
    build_graph, reconstruct_path, shortest_path, shortest_path_tree, Graph, PathOutcome, Route,
};
