//! Graph input normalization
//!
//! Graph files are accepted in a lenient form: ids may carry stray
//! whitespace, duplicate nodes may be collapsed, weights may be numeric
//! strings or live under an alias field. Normalization produces the strict
//! [`Graph`] the algorithms rely on, or an `InvalidGraph` error.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::bail_invalid_graph;
use crate::config::ValidationConfig;
use crate::error::{GraphLabError, Result};
use crate::graph::model::{Edge, Graph, NodeId};
use crate::graph::samples;

/// Input document syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSyntax {
    Json,
    Yaml,
}

impl InputSyntax {
    /// Guess syntax from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => InputSyntax::Yaml,
            _ => InputSyntax::Json,
        }
    }
}

/// Parse and normalize a graph document
pub fn parse_graph(content: &str, syntax: InputSyntax, rules: &ValidationConfig) -> Result<Graph> {
    let value: Value = match syntax {
        InputSyntax::Json => serde_json::from_str(content)?,
        InputSyntax::Yaml => serde_yaml::from_str(content)?,
    };
    normalize_graph(&value, rules)
}

/// Load a graph from a path, `-` for stdin, or `sample:<name>`
#[tracing::instrument(skip(rules))]
pub fn load_graph(source: &str, rules: &ValidationConfig) -> Result<Graph> {
    if let Some(name) = source.strip_prefix("sample:") {
        return samples::get(name);
    }

    if source == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return parse_graph(&content, InputSyntax::Json, rules);
    }

    let path = Path::new(source);
    let content = fs::read_to_string(path).map_err(|e| {
        GraphLabError::Other(format!("failed to read graph {}: {}", path.display(), e))
    })?;
    let graph = parse_graph(&content, InputSyntax::from_path(path), rules)?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        oriented = graph.is_oriented(),
        "graph loaded"
    );
    Ok(graph)
}

/// Normalize an already-parsed document into a validated graph
pub fn normalize_graph(input: &Value, rules: &ValidationConfig) -> Result<Graph> {
    let Some(obj) = input.as_object() else {
        bail_invalid_graph!("graph document must be an object");
    };

    let nodes = normalize_nodes(obj.get("nodes"), rules)?;
    if nodes.is_empty() && !rules.allow_empty {
        bail_invalid_graph!("graph has no nodes");
    }

    let edges = match obj.get("edges") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| normalize_edge(item, rules))
            .collect::<Result<Vec<_>>>()?,
        Some(_) => bail_invalid_graph!("'edges' must be an array"),
    };

    let is_oriented = match obj.get("isOriented") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(other) => bail_invalid_graph!("'isOriented' must be a boolean, got {}", other),
    };

    Graph::new(nodes, edges, is_oriented)
}

fn normalize_id(raw: &str, rules: &ValidationConfig) -> String {
    if rules.trim_ids {
        raw.trim().to_string()
    } else {
        raw.to_string()
    }
}

fn normalize_nodes(value: Option<&Value>, rules: &ValidationConfig) -> Result<Vec<NodeId>> {
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => bail_invalid_graph!("'nodes' must be an array of strings"),
    };

    let mut nodes: Vec<NodeId> = Vec::with_capacity(items.len());
    for item in items {
        let Some(raw) = item.as_str() else {
            bail_invalid_graph!("each node must be a non-empty string, got {}", item);
        };
        let id = normalize_id(raw, rules);
        if id.is_empty() {
            bail_invalid_graph!("each node must be a non-empty string");
        }
        if nodes.contains(&id) {
            if rules.dedupe_nodes {
                continue;
            }
            bail_invalid_graph!("duplicate node '{}'", id);
        }
        nodes.push(id);
    }
    Ok(nodes)
}

fn endpoint(obj: &serde_json::Map<String, Value>, key: &str, rules: &ValidationConfig) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => normalize_id(s, rules),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn parse_weight(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn normalize_edge(item: &Value, rules: &ValidationConfig) -> Result<Edge> {
    let Some(obj) = item.as_object() else {
        bail_invalid_graph!("each edge must be an object, got {}", item);
    };

    let from = endpoint(obj, "from", rules);
    let to = endpoint(obj, "to", rules);
    if from.is_empty() || to.is_empty() {
        bail_invalid_graph!("an edge is missing a valid 'from'/'to'");
    }

    let raw_weight = std::iter::once("weight")
        .chain(rules.weight_aliases.iter().map(String::as_str))
        .find_map(|key| obj.get(key).filter(|v| !v.is_null()));

    let weight = match raw_weight.and_then(parse_weight) {
        Some(w) if w.is_finite() => w,
        _ => bail_invalid_graph!("missing or non-numeric weight for ({} -> {})", from, to),
    };

    Ok(Edge { from, to, weight })
}
