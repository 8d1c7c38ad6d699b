//! `waypath tree`

use tracing::Level;
use waypath_core::error::Result;
use waypath_core::format::{sorted_tree_entries, tree_json};
use waypath_core::graph::{TracingObserver, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

/// Print cost and path to every vertex reachable from `start`, cheapest
/// first. The start itself is always reachable, so this never fails.
pub fn execute(cli: &Cli, graph: &WeightedGraph<String>, start: &str) -> Result<bool> {
    let start = start.to_string();
    let tree = if tracing::enabled!(Level::TRACE) {
        graph.shortest_path_tree_observed(&start, &mut TracingObserver)
    } else {
        graph.shortest_path_tree(&start)
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tree_json(&tree))?);
        }
        OutputFormat::Human => {
            for (vertex, cost) in sorted_tree_entries(&tree) {
                if let Some(best) = tree.path_to(vertex) {
                    println!("{}\t{}\t{}", vertex, cost, best.path.join(" -> "));
                }
            }
        }
    }

    Ok(true)
}
