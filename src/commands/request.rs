//! `graphlab request` - run an endpoint-style request body

use std::fs;
use std::io::Read;

use crate::commands::algorithm;
use crate::commands::dispatch::CommandContext;
use graphlab_core::error::{GraphLabError, Result};
use graphlab_core::request::{Algorithm, AlgorithmRequest};

fn read_body(source: &str) -> Result<String> {
    if source == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    fs::read_to_string(source)
        .map_err(|e| GraphLabError::Other(format!("failed to read request {}: {}", source, e)))
}

pub fn handle(ctx: &CommandContext, algorithm: Algorithm, source: &str) -> Result<()> {
    let body = read_body(source)?;
    let request = AlgorithmRequest::parse(&body, &ctx.config.validation)?;
    tracing::debug!(
        nodes = request.graph.node_count(),
        start = request.start.as_deref(),
        target = request.target.as_deref(),
        "request parsed"
    );
    algorithm::execute(ctx, algorithm, &request, None)
}
