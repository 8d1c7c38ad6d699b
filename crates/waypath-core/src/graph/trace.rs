//! Diagnostic side channel for shortest-path searches
//!
//! The search loop reports what it does to a [`SearchObserver`]. Observers
//! only ever receive shared references, so tracing a search cannot change
//! its costs, its path or where it stops. An untraced search is the same
//! loop driven with [`NoopObserver`].

use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{self, Debug};

use crate::graph::types::{Cost, Weight};

/// One edge examined while expanding a finalized vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relaxation<V> {
    pub from: V,
    pub to: V,
    pub weight: Weight,
    /// Cost of reaching `to` through this edge
    pub candidate: Cost,
    /// Best known cost of `to` before this edge was considered
    pub previous: Option<Cost>,
    /// Whether `candidate` replaced `previous`
    pub improved: bool,
}

/// Hooks invoked by the Dijkstra loop. Every hook defaults to doing nothing.
pub trait SearchObserver<V> {
    /// A queue entry was popped.
    fn on_pop(&mut self, _vertex: &V, _cost: Cost) {}

    /// A popped entry was discarded because its vertex is already final.
    fn on_stale(&mut self, _vertex: &V, _cost: Cost) {}

    /// `vertex` was finalized at `cost`; `finalized` includes it.
    fn on_finalize(&mut self, _vertex: &V, _cost: Cost, _finalized: &HashSet<V>) {}

    /// An outgoing edge of the vertex being expanded was considered.
    fn on_relax(&mut self, _step: &Relaxation<V>) {}

    /// The target was finalized and the search stops early.
    fn on_target_reached(&mut self, _vertex: &V, _cost: Cost) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<V> SearchObserver<V> for NoopObserver {}

/// A recorded search event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent<V> {
    Pop {
        vertex: V,
        cost: Cost,
    },
    Stale {
        vertex: V,
        cost: Cost,
    },
    Finalize {
        vertex: V,
        cost: Cost,
        /// Finalized vertices so far, in finalization order
        finalized: Vec<V>,
    },
    Relax(Relaxation<V>),
    TargetReached {
        vertex: V,
        cost: Cost,
    },
}

impl<V: fmt::Display> fmt::Display for TraceEvent<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Pop { vertex, cost } => write!(f, "pop {} (cost {})", vertex, cost),
            TraceEvent::Stale { vertex, cost } => {
                write!(f, "skip stale {} (cost {})", vertex, cost)
            }
            TraceEvent::Finalize {
                vertex,
                cost,
                finalized,
            } => {
                write!(f, "finalize {} (cost {}) finalized=[", vertex, cost)?;
                for (i, v) in finalized.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            TraceEvent::Relax(step) => {
                write!(
                    f,
                    "relax {} -> {} (weight {}): {} ",
                    step.from, step.to, step.weight, step.candidate
                )?;
                match (step.improved, step.previous) {
                    (true, Some(prev)) => write!(f, "improves {}", prev),
                    (true, None) => write!(f, "improves unknown"),
                    (false, Some(prev)) => write!(f, "kept {}", prev),
                    // Not reachable: an unknown cost is always improved
                    (false, None) => write!(f, "kept unknown"),
                }
            }
            TraceEvent::TargetReached { vertex, cost } => {
                write!(f, "reached target {} (cost {})", vertex, cost)
            }
        }
    }
}

/// Observer that records every event for later inspection
#[derive(Debug, Clone)]
pub struct TraceLog<V> {
    events: Vec<TraceEvent<V>>,
    finalized: Vec<V>,
}

impl<V> Default for TraceLog<V> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            finalized: Vec::new(),
        }
    }
}

impl<V> TraceLog<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent<V>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent<V>> {
        self.events
    }

    /// Vertices in the order they were finalized
    pub fn finalized_order(&self) -> &[V] {
        &self.finalized
    }

    /// Number of popped entries that were discarded as stale
    pub fn stale_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TraceEvent::Stale { .. }))
            .count()
    }
}

impl<V: Clone> SearchObserver<V> for TraceLog<V> {
    fn on_pop(&mut self, vertex: &V, cost: Cost) {
        self.events.push(TraceEvent::Pop {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn on_stale(&mut self, vertex: &V, cost: Cost) {
        self.events.push(TraceEvent::Stale {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn on_finalize(&mut self, vertex: &V, cost: Cost, _finalized: &HashSet<V>) {
        // Keep our own ordered copy; the set itself has no stable order.
        self.finalized.push(vertex.clone());
        self.events.push(TraceEvent::Finalize {
            vertex: vertex.clone(),
            cost,
            finalized: self.finalized.clone(),
        });
    }

    fn on_relax(&mut self, step: &Relaxation<V>) {
        self.events.push(TraceEvent::Relax(step.clone()));
    }

    fn on_target_reached(&mut self, vertex: &V, cost: Cost) {
        self.events.push(TraceEvent::TargetReached {
            vertex: vertex.clone(),
            cost,
        });
    }
}

/// Observer that forwards events to `tracing` at trace level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<V: Debug> SearchObserver<V> for TracingObserver {
    fn on_pop(&mut self, vertex: &V, cost: Cost) {
        tracing::trace!(vertex = ?vertex, cost, "pop");
    }

    fn on_stale(&mut self, vertex: &V, cost: Cost) {
        tracing::trace!(vertex = ?vertex, cost, "skip_stale");
    }

    fn on_finalize(&mut self, vertex: &V, cost: Cost, finalized: &HashSet<V>) {
        tracing::trace!(vertex = ?vertex, cost, finalized = ?finalized, "finalize");
    }

    fn on_relax(&mut self, step: &Relaxation<V>) {
        tracing::trace!(
            from = ?step.from,
            to = ?step.to,
            weight = step.weight,
            candidate = step.candidate,
            previous = ?step.previous,
            improved = step.improved,
            "relax"
        );
    }

    fn on_target_reached(&mut self, vertex: &V, cost: Cost) {
        tracing::trace!(vertex = ?vertex, cost, "target_reached");
    }
}
