//! Command implementations for all graphlab commands

use crate::cli::Commands;
use crate::commands::algorithm::{self, RunParams};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{request, sample, validate};
use graphlab_core::error::Result;
use graphlab_core::request::Algorithm;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Bfs(args) => algorithm::handle(
                ctx,
                RunParams::new(Algorithm::Bfs, &args.graph.graph).start(&args.start),
            ),
            Commands::Dfs(args) => algorithm::handle(
                ctx,
                RunParams::new(Algorithm::Dfs, &args.graph.graph).start(&args.start),
            ),
            Commands::Dijkstra(args) => algorithm::handle(
                ctx,
                RunParams::new(Algorithm::Dijkstra, &args.graph.graph)
                    .start(&args.start)
                    .target(&args.target),
            ),
            Commands::BellmanFord(args) => algorithm::handle(
                ctx,
                RunParams::new(Algorithm::BellmanFord, &args.graph.graph)
                    .start(&args.start)
                    .target(&args.target),
            ),
            Commands::FloydWarshall(args) => {
                let mut params = RunParams::new(Algorithm::FloydWarshall, &args.graph.graph);
                if let (Some(from), Some(to)) = (&args.from, &args.to) {
                    params = params.pair(from, to);
                }
                algorithm::handle(ctx, params)
            }
            Commands::Kruskal(args) => {
                algorithm::handle(ctx, RunParams::new(Algorithm::Kruskal, &args.graph))
            }
            Commands::Prim(args) => algorithm::handle(
                ctx,
                RunParams::new(Algorithm::Prim, &args.graph.graph).start(&args.start),
            ),
            Commands::Request(args) => request::handle(ctx, args.algorithm, &args.request),
            Commands::Validate(args) => validate::handle(ctx, &args.graph),
            Commands::Sample(args) => sample::handle(ctx, args.name.as_deref()),
        }
    }
}
