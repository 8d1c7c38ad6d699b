use waypath_core::bail_edge;
use waypath_core::error::{Result, WaypathError};
use waypath_core::format::OutputFormat;
use waypath_core::graph::Weight;

/// An edge given on the command line as `FROM:TO[:WEIGHT]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    /// `None` means "use the configured default weight"
    pub weight: Option<Weight>,
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse an edge argument for clap
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    parse_edge_spec(s).map_err(|e| e.to_string())
}

/// Parse `FROM:TO` or `FROM:TO:WEIGHT`.
///
/// The weight is only checked for being an integer here; sign validation
/// belongs to the graph.
pub fn parse_edge_spec(spec: &str) -> Result<EdgeSpec> {
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();

    let (from, to, weight) = match parts.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, weight] => {
            let weight = weight.parse::<Weight>().map_err(|e| {
                WaypathError::invalid_edge(spec, format!("bad weight `{}`: {}", weight, e))
            })?;
            (*from, *to, Some(weight))
        }
        _ => bail_edge!(spec, "expected FROM:TO or FROM:TO:WEIGHT"),
    };

    if from.is_empty() || to.is_empty() {
        bail_edge!(spec, "vertex names must not be empty");
    }

    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}
