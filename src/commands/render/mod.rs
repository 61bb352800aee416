//! Output rendering for algorithm results
//!
//! Each result type has a human and a records renderer in its own module;
//! JSON output is the result's serde form, matching the original HTTP wire
//! shape.

pub mod all_pairs;
pub mod path;
pub mod spanning_tree;
pub mod traversal;

use crate::cli::OutputFormat;
use graphlab_core::error::Result;
use graphlab_core::request::{Algorithm, AlgorithmOutput, AlgorithmRequest};

/// What the renderers need to know besides the result itself
pub struct RenderContext<'a> {
    pub algorithm: Algorithm,
    pub request: &'a AlgorithmRequest,
    /// Floyd-Warshall pair to reconstruct, when requested
    pub pair: Option<(&'a str, &'a str)>,
    pub precision: usize,
}

impl RenderContext<'_> {
    pub fn start(&self) -> &str {
        self.request.start.as_deref().unwrap_or_default()
    }

    pub fn target(&self) -> &str {
        self.request.target.as_deref().unwrap_or_default()
    }

    pub fn node_count(&self) -> usize {
        self.request.graph.node_count()
    }
}

/// Display name used in human output
pub fn title(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bfs => "BFS",
        Algorithm::Dfs => "DFS",
        Algorithm::Dijkstra => "Dijkstra",
        Algorithm::BellmanFord => "Bellman-Ford",
        Algorithm::FloydWarshall => "Floyd-Warshall",
        Algorithm::Kruskal => "Kruskal",
        Algorithm::Prim => "Prim",
    }
}

/// Render a result in the requested format
pub fn render(
    format: OutputFormat,
    view: &RenderContext,
    output: &AlgorithmOutput,
) -> Result<String> {
    match format {
        OutputFormat::Json => json(view, output),
        OutputFormat::Human => Ok(human(view, output)),
        OutputFormat::Records => Ok(records(view, output)),
    }
}

fn json(view: &RenderContext, output: &AlgorithmOutput) -> Result<String> {
    let value = match (output, view.pair) {
        (AlgorithmOutput::AllPairs(result), Some((from, to))) => {
            all_pairs::pair_json(result, from, to)?
        }
        _ => serde_json::to_value(output)?,
    };
    Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
}

fn human(view: &RenderContext, output: &AlgorithmOutput) -> String {
    match output {
        AlgorithmOutput::Traversal(result) => traversal::human(view, result),
        AlgorithmOutput::Path(result) => path::human(view, result, None),
        AlgorithmOutput::BellmanFord(result) => {
            path::human(view, &result.result, Some(result.has_negative_cycle))
        }
        AlgorithmOutput::AllPairs(result) => all_pairs::human(view, result),
        AlgorithmOutput::SpanningTree(result) => spanning_tree::human(view, result),
    }
}

fn records(view: &RenderContext, output: &AlgorithmOutput) -> String {
    match output {
        AlgorithmOutput::Traversal(result) => traversal::records(view, result),
        AlgorithmOutput::Path(result) => path::records(view, result, None),
        AlgorithmOutput::BellmanFord(result) => {
            path::records(view, &result.result, Some(result.has_negative_cycle))
        }
        AlgorithmOutput::AllPairs(result) => all_pairs::records(view, result),
        AlgorithmOutput::SpanningTree(result) => spanning_tree::records(view, result),
    }
}

/// Join lines with a trailing newline
pub(crate) fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
