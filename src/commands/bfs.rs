//! `waypath bfs`

use waypath_core::error::Result;
use waypath_core::format::bfs_json;
use waypath_core::graph::WeightedGraph;

use crate::cli::{Cli, OutputFormat};

/// Print the BFS order from `start`; `false` when `start` has no edges on
/// record.
pub fn execute(cli: &Cli, graph: &WeightedGraph<String>, start: &str) -> Result<bool> {
    let start = start.to_string();
    let order = graph.breadth_first_search(&start);

    match cli.format {
        OutputFormat::Json => {
            let output = bfs_json(&start, order.as_deref());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &order {
            Some(order) => println!("{}", order.join(" ")),
            None => println!("start vertex does not exist: {}", start),
        },
    }

    Ok(order.is_some())
}
