//! CLI commands for waypath

pub mod bfs;
pub mod dispatch;
pub mod graph;
pub mod path;
pub mod tree;
