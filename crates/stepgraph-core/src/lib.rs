//! Stepgraph Core Library
//!
//! Stepwise BFS, DFS and Dijkstra traversal over small weighted directed
//! graphs, with one observable snapshot per finalized node.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod request;
