//! Graph algorithm implementations
//!
//! - `dijkstra`: label-setting shortest paths with wait costs

pub mod dijkstra;

pub use dijkstra::{
    shortest_path, shortest_path_tree, Frontier, FrontierEntry, SearchStats, ShortestPathTree,
    Via,
};
