//! `waypath path`

use tracing::Level;
use waypath_core::error::Result;
use waypath_core::format::path_json;
use waypath_core::graph::{TraceLog, TracingObserver, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

/// Print the cheapest path `start -> end`, preceded by the search steps
/// when `trace` is set. Returns whether a path exists.
///
/// Without `trace`, search steps still go to the log when trace-level
/// logging is enabled (`--log-level trace`).
pub fn execute(
    cli: &Cli,
    graph: &WeightedGraph<String>,
    start: &str,
    end: &str,
    trace: bool,
) -> Result<bool> {
    let (start, end) = (start.to_string(), end.to_string());

    let (result, events) = if trace {
        let mut log = TraceLog::new();
        let result = graph.dijkstra_observed(&start, &end, &mut log);
        (result, Some(log.into_events()))
    } else if tracing::enabled!(Level::TRACE) {
        let result = graph.dijkstra_observed(&start, &end, &mut TracingObserver);
        (result, None)
    } else {
        (graph.dijkstra(&start, &end), None)
    };

    match cli.format {
        OutputFormat::Json => {
            let output = path_json(&start, &end, result.as_ref(), events.as_deref());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for event in events.iter().flatten() {
                println!("  {}", event);
            }
            match &result {
                Some(best) => println!("{}", best),
                None => println!("no path from {} to {}", start, end),
            }
        }
    }

    Ok(result.is_some())
}
