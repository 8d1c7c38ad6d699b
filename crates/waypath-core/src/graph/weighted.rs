//! The weighted graph facade
//!
//! [`WeightedGraph`] owns its adjacency store exclusively. Edge insertion
//! takes `&mut self`; every search takes `&self` and allocates its own
//! working set, so concurrent read-only searches are safe and no search can
//! observe a graph that is being mutated.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use crate::config::GraphConfig;
use crate::error::{Result, WaypathError};
use crate::graph::algos::{bfs_traverse, dijkstra_search};
use crate::graph::path::{build_shortest_path, ShortestPathTree};
use crate::graph::store::AdjacencyStore;
use crate::graph::trace::{NoopObserver, SearchObserver};
use crate::graph::types::{Cost, Edge, EdgeOptions, ShortestPath, Weight};
use crate::trace_time;

/// Directed graph with non-negative integer edge weights.
///
/// Vertices are caller-supplied values used directly as map keys; the graph
/// never wraps or renames them.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    store: AdjacencyStore<V>,
    config: GraphConfig,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            store: AdjacencyStore::default(),
            config: GraphConfig::default(),
        }
    }
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            store: AdjacencyStore::new(),
            config,
        }
    }

    /// Add an edge `source -> destination`, plus the reverse edge when
    /// `opts.bidirectional` is set.
    ///
    /// Parallel edges and self-loops are stored as given. A negative weight
    /// is rejected (leaving the graph untouched) unless
    /// `reject_negative_weights` is disabled in the config.
    pub fn add_edge(&mut self, source: V, destination: V, opts: EdgeOptions) -> Result<()> {
        if opts.weight < 0 {
            if self.config.reject_negative_weights {
                return Err(WaypathError::NegativeWeight {
                    weight: opts.weight,
                });
            }
            tracing::warn!(
                source = ?source,
                destination = ?destination,
                weight = opts.weight,
                "storing negative weight; shortest paths are unspecified"
            );
        }

        if opts.bidirectional {
            self.store
                .insert(destination.clone(), source.clone(), opts.weight);
        }
        self.store.insert(source, destination, opts.weight);
        Ok(())
    }

    /// Directed edge with the configured default weight
    pub fn connect(&mut self, source: V, destination: V) -> Result<()> {
        let weight = self.config.default_weight;
        self.add_edge(source, destination, EdgeOptions::weighted(weight))
    }

    /// Directed edge with an explicit weight
    pub fn add_weighted_edge(&mut self, source: V, destination: V, weight: Weight) -> Result<()> {
        self.add_edge(source, destination, EdgeOptions::weighted(weight))
    }

    /// Edge in both directions with the same weight
    pub fn add_undirected_edge(&mut self, source: V, destination: V, weight: Weight) -> Result<()> {
        self.add_edge(source, destination, EdgeOptions::bidirectional(weight))
    }

    /// Whether `vertex` has outgoing edges on record (was ever a source)
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.store.contains(vertex)
    }

    /// Outgoing edges of `vertex` in insertion order; empty when unknown
    pub fn neighbors(&self, vertex: &V) -> &[Edge<V>] {
        self.store.neighbors(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.store.vertices()
    }

    pub fn has_edge(&self, source: &V, destination: &V) -> bool {
        self.store.min_weight(source, destination).is_some()
    }

    /// Weight of the cheapest edge `source -> destination`
    pub fn edge_weight(&self, source: &V, destination: &V) -> Option<Weight> {
        self.store.min_weight(source, destination)
    }

    /// Cost of walking `path` using the cheapest edge at each step.
    ///
    /// `None` if some step has no edge. A single-vertex walk costs 0.
    pub fn path_cost(&self, path: &[V]) -> Option<Cost> {
        path.windows(2).try_fold(0, |total: Cost, step| {
            self.store
                .min_weight(&step[0], &step[1])
                .map(|w| total.saturating_add(w))
        })
    }

    /// Breadth-first order of every vertex reachable from `start`.
    ///
    /// Returns `None` when `start` has no adjacency entry.
    #[tracing::instrument(skip(self), fields(start = ?start))]
    pub fn breadth_first_search(&self, start: &V) -> Option<Vec<V>> {
        let mut order = Vec::new();
        if self.breadth_first_visit(start, |v| order.push(v.clone())) {
            Some(order)
        } else {
            None
        }
    }

    /// Call `visit` once per vertex reachable from `start`, in BFS order.
    ///
    /// Returns `false` without visiting anything when `start` has no
    /// adjacency entry.
    pub fn breadth_first_visit<F>(&self, start: &V, visit: F) -> bool
    where
        F: FnMut(&V),
    {
        if !self.store.contains(start) {
            tracing::debug!(start = ?start, "start vertex does not exist");
            return false;
        }

        let began = Instant::now();
        let visited = bfs_traverse(&self.store, start, visit);
        trace_time!(began, "bfs", visited = visited);
        true
    }

    /// Cheapest path from `start` to `end`, or `None` when `end` is
    /// unreachable.
    ///
    /// `start == end` always yields cost 0 and path `[start]`, even for a
    /// vertex the graph has never seen.
    pub fn dijkstra(&self, start: &V, end: &V) -> Option<ShortestPath<V>> {
        self.dijkstra_observed(start, end, &mut NoopObserver)
    }

    /// [`dijkstra`](Self::dijkstra) with every step reported to `observer`.
    #[tracing::instrument(skip(self, observer), fields(start = ?start, end = ?end))]
    pub fn dijkstra_observed<O>(
        &self,
        start: &V,
        end: &V,
        observer: &mut O,
    ) -> Option<ShortestPath<V>>
    where
        O: SearchObserver<V> + ?Sized,
    {
        let began = Instant::now();
        let outcome = dijkstra_search(&self.store, start, Some(end), observer);
        trace_time!(began, "dijkstra", finalized = outcome.finalized.len());

        if !outcome.reached_target {
            tracing::debug!(finalized = outcome.finalized.len(), "no path");
            return None;
        }

        let result = build_shortest_path(start, end, &outcome.costs, &outcome.parents);
        if let Some(sp) = &result {
            tracing::debug!(cost = sp.cost, hops = sp.hops(), "path found");
        }
        result
    }

    /// Shortest paths from `start` to every vertex it can reach
    pub fn shortest_path_tree(&self, start: &V) -> ShortestPathTree<V> {
        self.shortest_path_tree_observed(start, &mut NoopObserver)
    }

    /// [`shortest_path_tree`](Self::shortest_path_tree) with every step
    /// reported to `observer`.
    #[tracing::instrument(skip(self, observer), fields(start = ?start))]
    pub fn shortest_path_tree_observed<O>(&self, start: &V, observer: &mut O) -> ShortestPathTree<V>
    where
        O: SearchObserver<V> + ?Sized,
    {
        let outcome = dijkstra_search(&self.store, start, None, observer);
        tracing::debug!(reachable = outcome.costs.len(), "shortest path tree built");
        ShortestPathTree::new(start.clone(), outcome.costs, outcome.parents)
    }
}
