//! CLI argument parsing for graphlab
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AllPairsArgs, GraphArgs, PathArgs, RequestArgs, SampleArgs, StartArgs};
pub use graphlab_core::format::OutputFormat;
use parse::parse_format;

/// GraphLab - classical graph algorithms over small weighted graphs
#[derive(Parser, Debug)]
#[command(name = "graphlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records (defaults to the config value)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `graphlab_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./graphlab.toml when present)
    #[arg(long, global = true, env = "GRAPHLAB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first traversal from a start node
    Bfs(StartArgs),

    /// Depth-first traversal from a start node (edges treated as undirected)
    Dfs(StartArgs),

    /// Cheapest path with Dijkstra (edges treated as undirected)
    Dijkstra(PathArgs),

    /// Cheapest path with Bellman-Ford, detecting negative cycles
    BellmanFord(PathArgs),

    /// All-pairs shortest distances with Floyd-Warshall
    FloydWarshall(AllPairsArgs),

    /// Minimum spanning forest with Kruskal
    Kruskal(GraphArgs),

    /// Minimum spanning tree grown from a start node with Prim
    Prim(StartArgs),

    /// Run an endpoint-style request body: {"graph", "start", "target"}
    Request(RequestArgs),

    /// Load and validate a graph, then print a summary
    Validate(GraphArgs),

    /// List built-in sample graphs, or print one as graph JSON
    Sample(SampleArgs),
}
