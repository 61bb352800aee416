//! Algorithm subcommands (bfs, dfs, dijkstra, bellman-ford, floyd-warshall,
//! kruskal, prim)
//!
//! Every subcommand builds the same request the HTTP endpoint received and
//! goes through [`run_algorithm`], so CLI and request output never diverge.

use crate::commands::dispatch::CommandContext;
use crate::commands::render::{self, RenderContext};
use graphlab_core::error::Result;
use graphlab_core::request::{run_algorithm, Algorithm, AlgorithmRequest};

/// Parameters for one algorithm run
#[derive(Debug, Clone)]
pub struct RunParams<'a> {
    pub algorithm: Algorithm,
    pub source: &'a str,
    pub start: Option<&'a str>,
    pub target: Option<&'a str>,
    pub pair: Option<(&'a str, &'a str)>,
}

impl<'a> RunParams<'a> {
    pub fn new(algorithm: Algorithm, source: &'a str) -> Self {
        Self {
            algorithm,
            source,
            start: None,
            target: None,
            pair: None,
        }
    }

    pub fn start(mut self, start: &'a str) -> Self {
        self.start = Some(start);
        self
    }

    pub fn target(mut self, target: &'a str) -> Self {
        self.target = Some(target);
        self
    }

    pub fn pair(mut self, from: &'a str, to: &'a str) -> Self {
        self.pair = Some((from, to));
        self
    }
}

pub fn handle(ctx: &CommandContext, params: RunParams) -> Result<()> {
    let graph = ctx.load_graph(params.source)?;
    let mut request = AlgorithmRequest::new(graph);
    request.start = params.start.map(str::to_string);
    request.target = params.target.map(str::to_string);

    execute(ctx, params.algorithm, &request, params.pair)
}

/// Run a prepared request and print its rendering
pub fn execute(
    ctx: &CommandContext,
    algorithm: Algorithm,
    request: &AlgorithmRequest,
    pair: Option<(&str, &str)>,
) -> Result<()> {
    if let Some(start) = request.start.as_deref() {
        if !request.graph.contains(start) {
            tracing::warn!(start, "start node is not in the graph");
        }
    }

    let output = run_algorithm(algorithm, request)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), %algorithm, "run_algorithm");

    let view = RenderContext {
        algorithm,
        request,
        pair,
        precision: ctx.precision(),
    };
    ctx.emit(&render::render(ctx.format(), &view, &output)?);
    Ok(())
}
