//! Command argument structures

use clap::Args;

use crate::cli::parse::parse_algorithm;
use graphlab_core::request::Algorithm;

/// The graph a command operates on.
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Graph file (JSON, or YAML by extension), `-` for stdin, or `sample:<name>`
    pub graph: String,
}

/// Arguments for commands that start from one node (bfs, dfs, prim).
#[derive(Args, Debug)]
pub struct StartArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start node id
    #[arg(long, short)]
    pub start: String,
}

/// Arguments for single-pair shortest path commands.
#[derive(Args, Debug)]
pub struct PathArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start node id
    #[arg(long, short)]
    pub start: String,

    /// Target node id
    #[arg(long, short)]
    pub target: String,
}

/// Arguments for the floyd-warshall command.
#[derive(Args, Debug)]
pub struct AllPairsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Also reconstruct the path starting here (requires --to)
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Also reconstruct the path ending here (requires --from)
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

/// Arguments for the request command.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Algorithm to run (bfs, dfs, dijkstra, bellman-ford, floyd-warshall, kruskal, prim)
    #[arg(value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Request body file, or `-` for stdin
    pub request: String,
}

/// Arguments for the sample command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Sample to print; lists the available samples when omitted
    pub name: Option<String>,
}
