//! `graphlab validate` - load a graph and summarize it

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::finish;
use graphlab_core::error::Result;
use graphlab_core::graph::Graph;
use graphlab_core::records::{format_data_line, format_header, format_id};

/// Structural facts about a valid graph
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub valid: bool,
    pub nodes: usize,
    pub edges: usize,
    pub is_oriented: bool,
    pub has_negative_weight: bool,
    pub self_loops: usize,
    /// Nodes that appear in no edge
    pub isolated_nodes: Vec<String>,
}

impl GraphSummary {
    pub fn of(graph: &Graph) -> Self {
        let isolated_nodes = graph
            .nodes()
            .iter()
            .filter(|node| {
                graph.outgoing_edges(node.as_str()).next().is_none()
                    && graph.incoming_edges(node.as_str()).next().is_none()
            })
            .cloned()
            .collect();

        Self {
            valid: true,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            is_oriented: graph.is_oriented(),
            has_negative_weight: graph.has_negative_weight(),
            self_loops: graph.edges().iter().filter(|e| e.is_self_loop()).count(),
            isolated_nodes,
        }
    }
}

fn human(summary: &GraphSummary) -> String {
    let mut lines = vec![format!(
        "Valid graph: {} node{}, {} edge{}, {}",
        summary.nodes,
        if summary.nodes == 1 { "" } else { "s" },
        summary.edges,
        if summary.edges == 1 { "" } else { "s" },
        if summary.is_oriented { "oriented" } else { "undirected" }
    )];
    if summary.has_negative_weight {
        lines.push("Negative weights present: use bellman-ford or floyd-warshall".to_string());
    }
    if summary.self_loops > 0 {
        lines.push(format!("Self-loops: {}", summary.self_loops));
    }
    if !summary.isolated_nodes.is_empty() {
        lines.push(format!("Isolated nodes: {}", summary.isolated_nodes.join(", ")));
    }
    finish(lines)
}

fn records(summary: &GraphSummary) -> String {
    let mut lines = vec![format_header(
        "validate",
        &[
            ("nodes", summary.nodes.to_string()),
            ("edges", summary.edges.to_string()),
            ("oriented", summary.is_oriented.to_string()),
            ("negative_weights", summary.has_negative_weight.to_string()),
            ("self_loops", summary.self_loops.to_string()),
        ],
    )];
    for node in &summary.isolated_nodes {
        lines.push(format_data_line("isolated", &format_id(node)));
    }
    finish(lines)
}

pub fn handle(ctx: &CommandContext, source: &str) -> Result<()> {
    let graph = ctx.load_graph(source)?;
    let summary = GraphSummary::of(&graph);

    let text = match ctx.format() {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Records => records(&summary),
        OutputFormat::Human if ctx.cli.quiet => String::new(),
        OutputFormat::Human => human(&summary),
    };
    ctx.emit(&text);
    Ok(())
}
