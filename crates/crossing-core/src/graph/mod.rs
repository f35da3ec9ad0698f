//! Shortest-path engine
//!
//! - Graph store: dense node ids, per-node adjacency lists
//! - Relaxation scheduler: Dijkstra with pluggable wait costs
//! - Path reporter: route reconstruction from predecessor vectors

pub mod algos;
pub mod path;
pub mod store;
pub mod types;
pub mod wait;

pub use algos::{shortest_path, shortest_path_tree, SearchStats, ShortestPathTree};
pub use path::reconstruct_path;
pub use store::{build_graph, Graph};
pub use types::{Edge, Hop, NodeId, PathOutcome, Route, INFINITY};
pub use wait::{
    ConstantWait, NoWait, PerNodeWait, SignalWait, WaitContext, WaitCost, WaitPolicy,
};
