//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first traversal (unweighted reachability order)
//! - `dijkstra`: Weighted shortest paths with a lazy-deletion heap

pub mod bfs;
pub mod dijkstra;

pub use bfs::bfs_traverse;
pub use dijkstra::{dijkstra_search, SearchOutcome};
