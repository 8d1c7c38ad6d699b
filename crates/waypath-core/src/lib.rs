//! Waypath Core Library
//!
//! Weighted graph engine for the waypath CLI: edge insertion, breadth-first
//! traversal and Dijkstra shortest paths with optional tracing.
//!
//! ```
//! use waypath_core::graph::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_undirected_edge("A", "B", 5).unwrap();
//! graph.add_undirected_edge("A", "C", 2).unwrap();
//! graph.add_undirected_edge("C", "D", 3).unwrap();
//! graph.add_undirected_edge("B", "D", 10).unwrap();
//!
//! let best = graph.dijkstra(&"A", &"D").unwrap();
//! assert_eq!(best.cost, 5);
//! assert_eq!(best.path, vec!["A", "C", "D"]);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
