//! Single-algorithm request boundary
//!
//! A request carries a graph plus optional `start` and `target` node ids,
//! the same body each HTTP endpoint of the visualizer accepted. Running a
//! request calls exactly one algorithm and returns its result unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bail_usage;
use crate::config::ValidationConfig;
use crate::error::{GraphLabError, Result};
use crate::graph::{
    bellman_ford_shortest_path, bfs_traverse, dfs_traverse, dijkstra_shortest_path,
    floyd_warshall_all_pairs, kruskal_mst, normalize_graph, prim_mst, AllPairsResult,
    BellmanFordResult, Graph, MSTResult, NodeId, PathResult, TraversalResult,
};

/// The algorithms a request can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Kruskal,
    Prim,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::FloydWarshall,
        Algorithm::Kruskal,
        Algorithm::Prim,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::FloydWarshall => "floyd-warshall",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim => "prim",
        }
    }

    pub fn requires_start(&self) -> bool {
        matches!(
            self,
            Algorithm::Bfs
                | Algorithm::Dfs
                | Algorithm::Dijkstra
                | Algorithm::BellmanFord
                | Algorithm::Prim
        )
    }

    pub fn requires_target(&self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::BellmanFord)
    }
}

impl FromStr for Algorithm {
    type Err = GraphLabError;

    /// Accepts the kebab-case names plus the unhyphenated and snake_case
    /// spellings used by the original endpoint routes (`/bellmanford`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        match normalized.as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellmanford" => Ok(Algorithm::BellmanFord),
            "floydwarshall" => Ok(Algorithm::FloydWarshall),
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim),
            _ => Err(GraphLabError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body: a graph and the node ids the algorithm needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmRequest {
    pub graph: Graph,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeId>,
}

impl AlgorithmRequest {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            start: None,
            target: None,
        }
    }

    pub fn with_start(mut self, start: impl Into<NodeId>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<NodeId>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Parse a JSON request body, normalizing the embedded graph with
    /// `rules` so the same lenient input accepted from files works here
    pub fn parse(content: &str, rules: &ValidationConfig) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Some(body) = value.as_object() else {
            bail_usage!("request body must be a JSON object");
        };
        let Some(graph) = body.get("graph") else {
            bail_usage!("request body has no 'graph' field");
        };

        Ok(Self {
            graph: normalize_graph(graph, rules)?,
            start: node_field(body.get("start"), "start", rules)?,
            target: node_field(body.get("target"), "target", rules)?,
        })
    }
}

/// Read an optional node id field, trimmed like graph node ids
fn node_field(value: Option<&Value>, name: &str, rules: &ValidationConfig) -> Result<Option<NodeId>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if rules.trim_ids => Ok(Some(s.trim().to_string())),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(GraphLabError::UsageError(format!(
            "'{}' must be a string, got {}",
            name, other
        ))),
    }
}

/// Result of whichever algorithm a request ran
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AlgorithmOutput {
    Traversal(TraversalResult),
    Path(PathResult),
    BellmanFord(BellmanFordResult),
    AllPairs(AllPairsResult),
    SpanningTree(MSTResult),
}

fn required<'r>(field: Option<&'r NodeId>, algorithm: Algorithm, name: &str) -> Result<&'r str> {
    field
        .map(String::as_str)
        .ok_or_else(|| GraphLabError::missing_argument(algorithm, name))
}

/// Run one algorithm against a request.
///
/// Fails only when the request omits a start or target the algorithm
/// needs. A start or target that is present but not in the graph is not an
/// error: the algorithm returns its empty or unreachable result.
#[tracing::instrument(skip(request), fields(nodes = request.graph.node_count()))]
pub fn run_algorithm(algorithm: Algorithm, request: &AlgorithmRequest) -> Result<AlgorithmOutput> {
    let start = if algorithm.requires_start() {
        required(request.start.as_ref(), algorithm, "start")?
    } else {
        ""
    };
    let target = if algorithm.requires_target() {
        required(request.target.as_ref(), algorithm, "target")?
    } else {
        ""
    };

    let graph = &request.graph;
    let output = match algorithm {
        Algorithm::Bfs => AlgorithmOutput::Traversal(bfs_traverse(graph, start)),
        Algorithm::Dfs => AlgorithmOutput::Traversal(dfs_traverse(graph, start)),
        Algorithm::Dijkstra => AlgorithmOutput::Path(dijkstra_shortest_path(graph, start, target)),
        Algorithm::BellmanFord => {
            AlgorithmOutput::BellmanFord(bellman_ford_shortest_path(graph, start, target))
        }
        Algorithm::FloydWarshall => AlgorithmOutput::AllPairs(floyd_warshall_all_pairs(graph)),
        Algorithm::Kruskal => AlgorithmOutput::SpanningTree(kruskal_mst(graph)),
        Algorithm::Prim => AlgorithmOutput::SpanningTree(prim_mst(graph, start)),
    };
    Ok(output)
}
