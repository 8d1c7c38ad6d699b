//! Graph construction from command-line edges

use waypath_core::config::GraphConfig;
use waypath_core::error::Result;
use waypath_core::graph::WeightedGraph;

use crate::cli::EdgeSpec;

/// Build a graph from `--edge` then `--undirected` arguments, each group in
/// the order given. Edges without a weight use `config.default_weight`.
pub fn build_graph(
    config: &GraphConfig,
    directed: &[EdgeSpec],
    undirected: &[EdgeSpec],
) -> Result<WeightedGraph<String>> {
    let mut graph = WeightedGraph::with_config(*config);

    for edge in directed {
        let (from, to) = (edge.from.clone(), edge.to.clone());
        match edge.weight {
            Some(weight) => graph.add_weighted_edge(from, to, weight)?,
            None => graph.connect(from, to)?,
        }
    }

    for edge in undirected {
        let weight = edge.weight.unwrap_or(config.default_weight);
        graph.add_undirected_edge(edge.from.clone(), edge.to.clone(), weight)?;
    }

    Ok(graph)
}
