use super::{finish, title, RenderContext};
use graphlab_core::graph::TraversalResult;
use graphlab_core::records::{format_header, format_id, format_node_record, format_data_line};

fn unreached(result: &TraversalResult) -> Vec<&str> {
    result
        .parents
        .keys()
        .map(String::as_str)
        .filter(|node| !result.visited(node))
        .collect()
}

pub fn human(view: &RenderContext, result: &TraversalResult) -> String {
    let name = title(view.algorithm);
    if result.order.is_empty() {
        return finish(vec![format!(
            "{}: start node '{}' is not in the graph",
            name,
            view.start()
        )]);
    }

    let mut lines = vec![format!(
        "{} from {}: visited {} of {} nodes",
        name,
        view.start(),
        result.order.len(),
        view.node_count()
    )];
    for (position, node) in result.order.iter().enumerate() {
        match result.parent_of(node) {
            Some(parent) => lines.push(format!("  {:>3}. {}  (from {})", position + 1, node, parent)),
            None => lines.push(format!("  {:>3}. {}", position + 1, node)),
        }
    }

    let missing = unreached(result);
    if !missing.is_empty() {
        lines.push(format!("Not reached: {}", missing.join(", ")));
    }
    finish(lines)
}

pub fn records(view: &RenderContext, result: &TraversalResult) -> String {
    let mut lines = vec![format_header(
        view.algorithm.as_str(),
        &[
            ("start", format_id(view.start())),
            ("visited", result.order.len().to_string()),
            ("nodes", view.node_count().to_string()),
        ],
    )];
    for (position, node) in result.order.iter().enumerate() {
        lines.push(format_node_record(position, node, result.parent_of(node)));
    }
    for node in unreached(result) {
        lines.push(format_data_line("unreached", &format_id(node)));
    }
    finish(lines)
}
