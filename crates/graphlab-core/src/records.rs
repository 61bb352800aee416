//! Utilities for records output format
//!
//! Records are line-oriented: one `H` header line, then one line per item
//! with a single-letter prefix (`N` node, `E` edge, `P` path, `D` data).
//! Fields are separated by single spaces; node ids that contain whitespace
//! or quotes are written quoted.

use crate::graph::model::Edge;
use crate::graph::types::Cost;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Write a node id as a single field, quoting it only when needed
pub fn format_id(id: &str) -> String {
    if id.is_empty() || id.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", escape_quotes(id))
    } else {
        id.to_string()
    }
}

/// Write a weight without a trailing `.0` for whole numbers
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

/// Write a cost, spelling the sentinels as `inf` and `-inf`
pub fn format_cost(cost: Cost) -> String {
    if cost.is_unreachable() {
        "inf".to_string()
    } else if cost.is_unbounded() {
        "-inf".to_string()
    } else {
        format_weight(cost.value())
    }
}

/// Format the header line
///
/// # Examples
/// ```
/// use graphlab_core::records::format_header;
/// let line = format_header("bfs", &[("start", "A".to_string())]);
/// assert_eq!(line, "H graphlab=1 records=1 mode=bfs start=A");
/// ```
pub fn format_header(mode: &str, extra_fields: &[(&str, String)]) -> String {
    let mut parts = vec!["H graphlab=1 records=1".to_string(), format!("mode={}", mode)];
    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }
    parts.join(" ")
}

/// Format a node line with its traversal parent (`-` for none)
pub fn format_node_record(position: usize, id: &str, parent: Option<&str>) -> String {
    format!(
        "N {} {} parent={}",
        position,
        format_id(id),
        parent.map(format_id).unwrap_or_else(|| "-".to_string())
    )
}

/// Format an edge line
pub fn format_edge_record(edge: &Edge) -> String {
    format!(
        "E {} {} {}",
        format_id(&edge.from),
        format_id(&edge.to),
        format_weight(edge.weight)
    )
}

/// Format a path line: `P <cost> <node>...`
pub fn format_path_record(cost: Cost, path: &[String]) -> String {
    let mut parts = vec!["P".to_string(), format_cost(cost)];
    parts.extend(path.iter().map(|id| format_id(id)));
    parts.join(" ")
}

/// Format a data line
pub fn format_data_line(key: &str, value: &str) -> String {
    format!("D {} {}", key, value)
}
