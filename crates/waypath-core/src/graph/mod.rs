//! Weighted graph traversal and path-finding
//!
//! Provides:
//! - [`WeightedGraph`]: adjacency-list graph with non-negative integer weights
//! - BFS traversal in unweighted reachability order
//! - Dijkstra shortest paths (single target with early exit, or a full tree)
//! - Path reconstruction from cost/parent maps
//! - Observer hooks for step-by-step diagnostic tracing

pub mod algos;
pub mod path;
pub mod store;
pub mod trace;
pub mod types;
pub mod weighted;

pub use path::{build_shortest_path, reconstruct_path, ShortestPathTree};
pub use store::AdjacencyStore;
pub use trace::{NoopObserver, Relaxation, SearchObserver, TraceEvent, TraceLog, TracingObserver};
pub use types::{Cost, Edge, EdgeOptions, ShortestPath, Weight, DEFAULT_WEIGHT};
pub use weighted::WeightedGraph;
