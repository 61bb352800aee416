use super::{finish, RenderContext};
use graphlab_core::error::Result;
use graphlab_core::format::format_cost;
use graphlab_core::graph::{AllPairsResult, Cost, PathResult};
use graphlab_core::records::{
    format_cost as record_cost, format_data_line, format_header, format_id, format_path_record,
};

/// Path between one pair, rebuilt from the next-hop matrix
fn pair_path(result: &AllPairsResult, from: &str, to: &str) -> PathResult {
    match (result.path_between(from, to), result.distance(from, to)) {
        (Some(path), Some(cost)) if !cost.is_unreachable() => PathResult {
            path,
            total_cost: cost,
        },
        _ => PathResult::unreachable(),
    }
}

/// JSON for `--from/--to`: the reconstructed pair instead of the matrices
pub fn pair_json(result: &AllPairsResult, from: &str, to: &str) -> Result<serde_json::Value> {
    let pair = pair_path(result, from, to);
    let mut value = serde_json::to_value(&pair)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("from".to_string(), serde_json::json!(from));
        obj.insert("to".to_string(), serde_json::json!(to));
        obj.insert(
            "hasNegativeCycle".to_string(),
            serde_json::json!(result.has_negative_cycle),
        );
    }
    Ok(value)
}

fn cell(cost: Cost, precision: usize) -> String {
    if cost.is_unreachable() {
        "-".to_string()
    } else {
        format_cost(cost, precision)
    }
}

pub fn human(view: &RenderContext, result: &AllPairsResult) -> String {
    let header: Vec<String> = result.nodes.clone();
    let rows: Vec<Vec<String>> = result
        .distances
        .iter()
        .map(|row| row.iter().map(|c| cell(*c, view.precision)).collect())
        .collect();

    let label_width = header.iter().map(String::len).max().unwrap_or(0);
    let column_width = header
        .iter()
        .map(String::len)
        .chain(rows.iter().flatten().map(String::len))
        .max()
        .unwrap_or(1);

    let mut lines = vec![format!(
        "Floyd-Warshall distances ({} nodes, '-' = unreachable)",
        result.nodes.len()
    )];
    let mut head = format!("{:label_width$}", "");
    for node in &header {
        head.push_str(&format!("  {:>column_width$}", node));
    }
    lines.push(head.trim_end().to_string());
    for (node, row) in header.iter().zip(&rows) {
        let mut line = format!("{:label_width$}", node);
        for value in row {
            line.push_str(&format!("  {:>column_width$}", value));
        }
        lines.push(line);
    }

    if result.has_negative_cycle {
        lines.push("Warning: the graph contains a negative cycle".to_string());
    }

    if let Some((from, to)) = view.pair {
        let pair = pair_path(result, from, to);
        if pair.found() {
            lines.push(format!(
                "Path {} -> {}: {} (cost {})",
                from,
                to,
                pair.path.join(" -> "),
                format_cost(pair.total_cost, view.precision)
            ));
        } else {
            lines.push(format!("No path from {} to {}", from, to));
        }
    }
    finish(lines)
}

pub fn records(view: &RenderContext, result: &AllPairsResult) -> String {
    let mut lines = vec![format_header(
        view.algorithm.as_str(),
        &[
            ("nodes", result.nodes.len().to_string()),
            ("negative_cycle", result.has_negative_cycle.to_string()),
        ],
    )];

    for (i, from) in result.nodes.iter().enumerate() {
        for (j, to) in result.nodes.iter().enumerate() {
            let cost = result.distances[i][j];
            if i == j || cost.is_unreachable() {
                continue;
            }
            let next = result.next[i][j].as_deref().map(format_id);
            lines.push(format_data_line(
                "dist",
                &format!(
                    "{} {} {} next={}",
                    format_id(from),
                    format_id(to),
                    record_cost(cost),
                    next.unwrap_or_else(|| "-".to_string())
                ),
            ));
        }
    }

    if let Some((from, to)) = view.pair {
        let pair = pair_path(result, from, to);
        lines.push(format_path_record(pair.total_cost, &pair.path));
    }
    finish(lines)
}
