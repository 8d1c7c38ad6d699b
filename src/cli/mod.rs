//! CLI argument parsing for waypath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, plus repeatable --edge/--undirected graph arguments.

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use parse::{parse_edge, parse_output_format};

pub use parse::EdgeSpec;
pub use waypath_core::format::OutputFormat;

/// Waypath - weighted graph traversal and shortest paths
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (a level such as `debug`, or a full filter directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to ./waypath.toml when present)
    #[arg(long, global = true, env = "WAYPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directed edge FROM:TO[:WEIGHT] (repeatable)
    #[arg(
        long = "edge",
        short = 'e',
        global = true,
        value_name = "FROM:TO[:W]",
        value_parser = parse_edge
    )]
    pub edges: Vec<EdgeSpec>,

    /// Undirected edge FROM:TO[:WEIGHT] (repeatable)
    #[arg(
        long = "undirected",
        short = 'u',
        global = true,
        value_name = "FROM:TO[:W]",
        value_parser = parse_edge
    )]
    pub undirected: Vec<EdgeSpec>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List vertices reachable from START in breadth-first order
    Bfs {
        /// Vertex to start from
        start: String,
    },

    /// Find the cheapest path from START to END
    Path {
        /// Vertex to start from
        start: String,

        /// Vertex to reach
        end: String,

        /// Report every search step (pops, skips, relaxations)
        #[arg(long)]
        trace: bool,
    },

    /// Show the cheapest path from START to every reachable vertex
    Tree {
        /// Vertex to start from
        start: String,
    },
}
