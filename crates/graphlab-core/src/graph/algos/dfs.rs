use crate::graph::algos::shared::initial_parents;
use crate::graph::types::{Direction, TraversalResult};
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// Perform depth-first pre-order traversal from a start node.
///
/// Edges are always treated as undirected. Neighbors are explored in
/// lexicographic order. The walk uses an explicit stack of
/// `(node, next neighbor index)` frames, producing the same order as the
/// recursive formulation without deep call stacks.
#[tracing::instrument(skip(provider), fields(nodes = provider.nodes().len()))]
pub fn dfs_traverse(provider: &dyn GraphProvider, start: &str) -> TraversalResult {
    let Some(start) = provider.nodes().iter().find(|n| *n == start) else {
        tracing::debug!("start node not in graph");
        return TraversalResult::empty(provider.nodes());
    };

    let adjacency = provider.adjacency(Direction::Both);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut order = vec![start.clone()];
    let mut parents = initial_parents(provider.nodes());
    let mut stack: Vec<(&str, usize)> = vec![(start.as_str(), 0)];
    visited.insert(start.as_str());

    while let Some(frame) = stack.last_mut() {
        let current = frame.0;
        let next = adjacency
            .neighbors(current)
            .get(frame.1)
            .map(|(neighbor, _)| *neighbor);
        frame.1 += 1;

        match next {
            Some(neighbor) => {
                if visited.insert(neighbor) {
                    order.push(neighbor.to_string());
                    parents.insert(neighbor.to_string(), Some(current.to_string()));
                    stack.push((neighbor, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!(visited = order.len(), "dfs complete");
    TraversalResult { order, parents }
}
