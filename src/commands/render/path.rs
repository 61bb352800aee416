use super::{finish, title, RenderContext};
use graphlab_core::format::format_cost;
use graphlab_core::graph::PathResult;
use graphlab_core::records::{format_cost as record_cost, format_header, format_id, format_path_record};

/// Human rendering of a single-pair path. `negative_cycle` is `Some` only
/// for Bellman-Ford results.
pub fn human(view: &RenderContext, result: &PathResult, negative_cycle: Option<bool>) -> String {
    let name = title(view.algorithm);
    let mut lines = Vec::new();

    if result.found() {
        lines.push(format!("{}: {}", name, result.path.join(" -> ")));
        lines.push(format!(
            "Cost: {} ({} hop{})",
            format_cost(result.total_cost, view.precision),
            result.hops(),
            if result.hops() == 1 { "" } else { "s" }
        ));
    } else if result.total_cost.is_unbounded() {
        lines.push(format!(
            "{}: no shortest path from {} to {}: a negative cycle makes it arbitrarily cheap",
            name,
            view.start(),
            view.target()
        ));
    } else {
        lines.push(format!(
            "{}: no path from {} to {}",
            name,
            view.start(),
            view.target()
        ));
    }

    if negative_cycle == Some(true) {
        lines.push(format!(
            "Warning: a negative cycle is reachable from {}",
            view.start()
        ));
    }
    finish(lines)
}

pub fn records(view: &RenderContext, result: &PathResult, negative_cycle: Option<bool>) -> String {
    let mut fields = vec![
        ("start", format_id(view.start())),
        ("target", format_id(view.target())),
        ("found", result.found().to_string()),
        ("cost", record_cost(result.total_cost)),
    ];
    if let Some(flag) = negative_cycle {
        fields.push(("negative_cycle", flag.to_string()));
    }

    finish(vec![
        format_header(view.algorithm.as_str(), &fields),
        format_path_record(result.total_cost, &result.path),
    ])
}
