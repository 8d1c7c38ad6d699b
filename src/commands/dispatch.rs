//! Command dispatch logic for waypath

use std::env;
use std::time::Instant;

use tracing::debug;
use waypath_core::config::WaypathConfig;
use waypath_core::error::{ExitCode, Result};

use crate::cli::{Cli, Commands};
use crate::commands::graph::build_graph;
use crate::commands::{bfs, path, tree};

/// Run the parsed command.
///
/// A search that finds nothing is a result, not an error: it is printed
/// normally and mapped to [`ExitCode::Failure`].
pub fn run(cli: &Cli, start: Instant) -> Result<ExitCode> {
    let cwd = env::current_dir()?;
    let config = WaypathConfig::load_or_default(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let graph = build_graph(&config.graph, &cli.edges, &cli.undirected)?;

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed = ?start.elapsed(),
        "build_graph"
    );

    let found = match &cli.command {
        Commands::Bfs { start: from } => bfs::execute(cli, &graph, from)?,
        Commands::Path {
            start: from,
            end,
            trace,
        } => path::execute(cli, &graph, from, end, *trace || config.trace.enabled)?,
        Commands::Tree { start: from } => tree::execute(cli, &graph, from)?,
    };

    debug!(elapsed = ?start.elapsed(), found, "execute_command");

    Ok(if found {
        ExitCode::Success
    } else {
        ExitCode::Failure
    })
}
