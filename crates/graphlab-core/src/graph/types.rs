use crate::graph::model::{Edge, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated cost of a path.
///
/// Edge weights are finite reals. Two sentinels sit at the ends of the
/// range: [`Cost::MAX`] marks an unreachable target and [`Cost::MIN`] marks
/// a target whose distance is unbounded below because of a negative cycle.
/// Both serialize as ordinary JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const MAX: Cost = Cost(f64::MAX);
    pub const MIN: Cost = Cost(f64::MIN);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_unreachable(&self) -> bool {
        self.0 == f64::MAX
    }

    pub fn is_unbounded(&self) -> bool {
        self.0 == f64::MIN
    }

    /// Add a weight, keeping sentinels absorbing instead of overflowing
    pub fn saturating_add(self, weight: f64) -> Self {
        if self.is_unreachable() || self.is_unbounded() {
            self
        } else {
            Cost(self.0 + weight)
        }
    }

    /// Total order usable by heaps and sorts
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other.0)
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

/// Direction used when collecting a node's neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Follow edges from `from` to `to` only
    Out,
    /// Follow edges backwards, from `to` to `from`
    In,
    #[default]
    /// Treat every edge as traversable both ways
    Both,
}

impl Direction {
    /// Direction implied by a graph's orientation flag
    pub fn for_orientation(is_oriented: bool) -> Self {
        if is_oriented {
            Direction::Out
        } else {
            Direction::Both
        }
    }
}

/// Visitation order and predecessor map produced by BFS and DFS
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalResult {
    pub order: Vec<NodeId>,
    /// Every node of the graph; `None` for the start and for unreached nodes
    pub parents: BTreeMap<NodeId, Option<NodeId>>,
}

impl TraversalResult {
    /// Result for a start node that is not in the graph
    pub fn empty(nodes: &[NodeId]) -> Self {
        Self {
            order: Vec::new(),
            parents: nodes.iter().map(|n| (n.clone(), None)).collect(),
        }
    }

    pub fn parent_of(&self, node: &str) -> Option<&str> {
        self.parents.get(node).and_then(|p| p.as_deref())
    }

    pub fn visited(&self, node: &str) -> bool {
        self.order.iter().any(|n| n == node)
    }
}

/// Single-source single-target shortest path
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Nodes from start to target inclusive; empty when unreachable
    pub path: Vec<NodeId>,
    pub total_cost: Cost,
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            total_cost: Cost::MAX,
        }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Target whose distance is unbounded below
    pub fn unbounded() -> Self {
        Self {
            path: Vec::new(),
            total_cost: Cost::MIN,
        }
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Bellman-Ford path plus the negative cycle indicator and the distance and
/// parent of every node from the start
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BellmanFordResult {
    #[serde(flatten)]
    pub result: PathResult,
    /// A negative-weight cycle is reachable from the start node
    pub has_negative_cycle: bool,
    /// Every node of the graph: `Cost::MAX` when unreached, `Cost::MIN` when
    /// on or downstream of a negative cycle
    pub distances: BTreeMap<NodeId, Cost>,
    /// Predecessor on the cheapest known path; `None` for the start and for
    /// unreached or unbounded nodes
    pub parents: BTreeMap<NodeId, Option<NodeId>>,
}

/// Distance and next-hop matrices over every ordered pair of nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllPairsResult {
    pub nodes: Vec<NodeId>,
    /// `Cost::MAX` where `j` is unreachable from `i`
    pub distances: Vec<Vec<Cost>>,
    pub next: Vec<Vec<Option<NodeId>>>,
    /// Some node lies on a negative cycle (`distances[i][i] < 0`)
    pub has_negative_cycle: bool,
}

impl AllPairsResult {
    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }

    pub fn distance(&self, from: &str, to: &str) -> Option<Cost> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        self.distances.get(i)?.get(j).copied()
    }

    /// Reconstruct the path between two nodes by following `next`.
    ///
    /// Returns `None` when either node is unknown, the target is
    /// unreachable, or the walk does not terminate within `|nodes|` hops
    /// (only possible through a negative cycle).
    pub fn path_between(&self, from: &str, to: &str) -> Option<Vec<NodeId>> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        if i == j {
            return Some(vec![from.to_string()]);
        }

        let mut path = vec![from.to_string()];
        let mut current = i;
        while current != j {
            let hop = self.next.get(current)?.get(j)?.as_ref()?;
            current = self.index_of(hop)?;
            path.push(hop.clone());
            if path.len() > self.nodes.len() {
                return None;
            }
        }
        Some(path)
    }
}

/// Edges of a minimum spanning tree or forest
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MSTResult {
    pub edges: Vec<Edge>,
    pub total_cost: Cost,
}

impl MSTResult {
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_cost: Cost::ZERO,
        }
    }

    pub(crate) fn push(&mut self, edge: Edge) {
        self.total_cost = self.total_cost.saturating_add(edge.weight);
        self.edges.push(edge);
    }

    /// A spanning tree of a graph with `node_count` nodes has `node_count - 1` edges
    pub fn is_spanning(&self, node_count: usize) -> bool {
        self.edges.len() + 1 == node_count.max(1)
    }
}
