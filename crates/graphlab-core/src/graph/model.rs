//! In-memory weighted graph
//!
//! A graph is built once per request and never mutated afterwards. Node
//! order is the insertion order of `nodes`, which fixes the row/column
//! order of Floyd-Warshall matrices and the union-find seeding in Kruskal.

use crate::bail_invalid_graph;
use crate::error::{GraphLabError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Node identifier as it appears on the wire
pub type NodeId = String;

/// A weighted edge. Orientation is a property of the owning graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint at all
    pub fn other_end(&self, node: &str) -> Option<&str> {
        if self.from == node {
            Some(&self.to)
        } else if self.to == node {
            Some(&self.from)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Strict wire form, validated into a [`Graph`] on deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphDocument {
    nodes: Vec<NodeId>,
    #[serde(default)]
    edges: Vec<Edge>,
    #[serde(default)]
    is_oriented: bool,
}

impl TryFrom<GraphDocument> for Graph {
    type Error = GraphLabError;

    fn try_from(doc: GraphDocument) -> Result<Self> {
        Graph::new(doc.nodes, doc.edges, doc.is_oriented)
    }
}

/// A validated graph: unique node ids, every edge endpoint known, every
/// weight finite and strictly inside the `Cost` sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GraphDocument")]
pub struct Graph {
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
    is_oriented: bool,
}

impl Graph {
    /// Build a graph, rejecting structurally invalid input
    pub fn new(nodes: Vec<NodeId>, edges: Vec<Edge>, is_oriented: bool) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if node.is_empty() {
                bail_invalid_graph!("node ids must be non-empty strings");
            }
            if !seen.insert(node.as_str()) {
                bail_invalid_graph!("duplicate node '{}'", node);
            }
        }

        for edge in &edges {
            for endpoint in [&edge.from, &edge.to] {
                if !seen.contains(endpoint.as_str()) {
                    bail_invalid_graph!(
                        "edge ({} -> {}) references unknown node '{}'",
                        edge.from,
                        edge.to,
                        endpoint
                    );
                }
            }
            if !edge.weight.is_finite() {
                bail_invalid_graph!(
                    "edge ({} -> {}) has a non-finite weight",
                    edge.from,
                    edge.to
                );
            }
            if edge.weight.abs() == f64::MAX {
                bail_invalid_graph!(
                    "edge ({} -> {}) has a weight at the limit of the cost range",
                    edge.from,
                    edge.to
                );
            }
        }

        Ok(Self {
            nodes,
            edges,
            is_oriented,
        })
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_oriented(&self) -> bool {
        self.is_oriented
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.iter().any(|n| n == node)
    }

    /// Edges whose `from` is `node`, regardless of orientation
    pub fn outgoing_edges<'a>(&'a self, node: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.from == node)
    }

    /// Edges whose `to` is `node`, regardless of orientation
    pub fn incoming_edges<'a>(&'a self, node: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.to == node)
    }

    pub fn has_negative_weight(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0.0)
    }
}
