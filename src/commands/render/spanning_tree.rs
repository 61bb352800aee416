use super::{finish, title, RenderContext};
use graphlab_core::format::format_cost;
use graphlab_core::graph::MSTResult;
use graphlab_core::records::{format_cost as record_cost, format_edge_record, format_header, format_id};
use graphlab_core::request::Algorithm;

pub fn human(view: &RenderContext, result: &MSTResult) -> String {
    let name = title(view.algorithm);
    let origin = if view.algorithm == Algorithm::Prim {
        format!(" from {}", view.start())
    } else {
        String::new()
    };

    let mut lines = vec![format!(
        "{} spanning tree{}: {} edge{}, total cost {}",
        name,
        origin,
        result.edges.len(),
        if result.edges.len() == 1 { "" } else { "s" },
        format_cost(result.total_cost, view.precision)
    )];
    for edge in &result.edges {
        lines.push(format!("  {} - {}  {}", edge.from, edge.to, format_cost(edge.weight.into(), view.precision)));
    }

    if !result.is_spanning(view.node_count()) {
        lines.push(format!(
            "Not spanning: {} of {} nodes are connected by the result",
            spanned_nodes(result, view),
            view.node_count()
        ));
    }
    finish(lines)
}

/// Nodes touched by the result; a lone start node counts for Prim
fn spanned_nodes(result: &MSTResult, view: &RenderContext) -> usize {
    let mut nodes: Vec<&str> = result
        .edges
        .iter()
        .flat_map(|e| [e.from.as_str(), e.to.as_str()])
        .collect();
    if view.algorithm == Algorithm::Prim && view.request.graph.contains(view.start()) {
        nodes.push(view.start());
    }
    nodes.sort_unstable();
    nodes.dedup();
    nodes.len()
}

pub fn records(view: &RenderContext, result: &MSTResult) -> String {
    let mut fields = Vec::new();
    if view.algorithm == Algorithm::Prim {
        fields.push(("start", format_id(view.start())));
    }
    fields.push(("edges", result.edges.len().to_string()));
    fields.push(("cost", record_cost(result.total_cost)));
    fields.push(("spanning", result.is_spanning(view.node_count()).to_string()));

    let mut lines = vec![format_header(view.algorithm.as_str(), &fields)];
    lines.extend(result.edges.iter().map(format_edge_record));
    finish(lines)
}
