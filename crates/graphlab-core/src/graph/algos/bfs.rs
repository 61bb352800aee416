use crate::graph::algos::shared::initial_parents;
use crate::graph::model::NodeId;
use crate::graph::types::{Direction, TraversalResult};
use crate::graph::GraphProvider;
use std::collections::{BTreeMap, HashSet, VecDeque};

/// State tracked during BFS traversal
struct BfsState<'g> {
    visited: HashSet<&'g str>,
    queue: VecDeque<&'g str>,
    order: Vec<NodeId>,
    parents: BTreeMap<NodeId, Option<NodeId>>,
}

impl<'g> BfsState<'g> {
    fn new(nodes: &[NodeId]) -> Self {
        Self {
            visited: HashSet::new(),
            queue: VecDeque::new(),
            order: Vec::new(),
            parents: initial_parents(nodes),
        }
    }

    /// Mark a node visited and queue it for expansion
    fn visit(&mut self, node: &'g str, parent: Option<&str>) {
        self.visited.insert(node);
        self.order.push(node.to_string());
        self.parents
            .insert(node.to_string(), parent.map(str::to_string));
        self.queue.push_back(node);
    }
}

/// Perform BFS traversal from a start node.
///
/// Oriented graphs follow edges from `from` to `to` only; otherwise both
/// endpoints are neighbors. Unvisited neighbors are visited in ascending
/// lexicographic order, so the output is independent of edge order.
/// A start node absent from the graph yields an empty order.
#[tracing::instrument(skip(provider), fields(nodes = provider.nodes().len(), oriented = provider.is_oriented()))]
pub fn bfs_traverse(provider: &dyn GraphProvider, start: &str) -> TraversalResult {
    let Some(start) = provider.nodes().iter().find(|n| *n == start) else {
        tracing::debug!("start node not in graph");
        return TraversalResult::empty(provider.nodes());
    };

    let adjacency = provider.adjacency(Direction::for_orientation(provider.is_oriented()));
    let mut state = BfsState::new(provider.nodes());
    state.visit(start, None);

    // Main BFS loop
    while let Some(current) = state.queue.pop_front() {
        for &(neighbor, _) in adjacency.neighbors(current) {
            if !state.visited.contains(neighbor) {
                state.visit(neighbor, Some(current));
            }
        }
    }

    tracing::debug!(visited = state.order.len(), "bfs complete");
    TraversalResult {
        order: state.order,
        parents: state.parents,
    }
}
