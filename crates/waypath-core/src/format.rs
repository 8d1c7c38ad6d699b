//! Output format handling for waypath
//!
//! Supports two output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WaypathError;
use crate::graph::{Cost, ShortestPath, ShortestPathTree, TraceEvent};

/// Output format for waypath commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(WaypathError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// JSON for a BFS result; `order` is null when the start does not exist
pub fn bfs_json<V: Serialize>(start: &V, order: Option<&[V]>) -> Value {
    serde_json::json!({
        "start": start,
        "found": order.is_some(),
        "order": order,
    })
}

/// JSON for a shortest-path result, with the trace when one was recorded
pub fn path_json<V: Serialize>(
    start: &V,
    end: &V,
    result: Option<&ShortestPath<V>>,
    trace: Option<&[TraceEvent<V>]>,
) -> Value {
    let mut json = match result {
        Some(sp) => serde_json::json!({
            "start": start,
            "end": end,
            "found": true,
            "cost": sp.cost,
            "path": sp.path,
        }),
        None => serde_json::json!({
            "start": start,
            "end": end,
            "found": false,
        }),
    };

    if let (Some(events), Some(obj)) = (trace, json.as_object_mut()) {
        obj.insert("trace".to_string(), serde_json::json!(events));
    }

    json
}

/// JSON for a shortest-path tree, entries sorted by cost then vertex
pub fn tree_json<V>(tree: &ShortestPathTree<V>) -> Value
where
    V: Eq + Hash + Clone + Ord + Serialize,
{
    let entries: Vec<Value> = sorted_tree_entries(tree)
        .into_iter()
        .filter_map(|(vertex, _)| tree.path_to(vertex))
        .map(|sp| {
            serde_json::json!({
                "vertex": sp.target(),
                "cost": sp.cost,
                "path": sp.path,
            })
        })
        .collect();

    serde_json::json!({
        "start": tree.start(),
        "reachable": entries,
    })
}

/// Tree entries ordered by cost, then vertex, for stable output
pub fn sorted_tree_entries<V>(tree: &ShortestPathTree<V>) -> Vec<(&V, Cost)>
where
    V: Eq + Hash + Clone + Ord,
{
    let mut entries: Vec<_> = tree.reachable().collect();
    entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    entries
}
