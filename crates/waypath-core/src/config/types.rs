//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::Weight;

/// Top-level waypath configuration (`waypath.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypathConfig {
    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Diagnostic tracing settings
    #[serde(default)]
    pub trace: TraceConfig,
}

/// Graph construction settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Weight used for edges added without an explicit weight
    #[serde(default = "default_weight")]
    pub default_weight: Weight,

    /// Reject negative weights in `add_edge` instead of storing them
    #[serde(default = "default_true")]
    pub reject_negative_weights: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_weight: default_weight(),
            reject_negative_weights: default_true(),
        }
    }
}

/// Diagnostic tracing settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Trace every shortest-path search, not only those run with `--trace`
    #[serde(default)]
    pub enabled: bool,
}

fn default_weight() -> Weight {
    1
}

fn default_true() -> bool {
    true
}
