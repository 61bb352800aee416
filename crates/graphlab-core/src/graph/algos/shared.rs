use crate::graph::model::NodeId;
use crate::graph::types::{Cost, PathResult};
use crate::graph::GraphProvider;
use std::collections::{BTreeMap, HashMap};

/// Parent map with every node present and unset
pub fn initial_parents(nodes: &[NodeId]) -> BTreeMap<NodeId, Option<NodeId>> {
    nodes.iter().map(|n| (n.clone(), None)).collect()
}

/// Walk predecessors from `target` back to `start`.
///
/// Returns `None` when the chain breaks before reaching `start`. The walk is
/// bounded by the number of recorded predecessors so a corrupt map cannot
/// loop forever.
pub fn reconstruct_path(
    start: &str,
    target: &str,
    predecessors: &HashMap<&str, &str>,
) -> Option<Vec<NodeId>> {
    let mut path = vec![target.to_string()];
    let mut current = target;

    while current != start {
        current = *predecessors.get(current)?;
        path.push(current.to_string());
        if path.len() > predecessors.len() + 1 {
            return None;
        }
    }

    path.reverse();
    Some(path)
}

/// Build the final path result for a settled single-source search
pub fn build_path_result(
    provider: &dyn GraphProvider,
    start: &str,
    target: &str,
    distances: &HashMap<&str, Cost>,
    predecessors: &HashMap<&str, &str>,
) -> PathResult {
    if !provider.contains(start) || !provider.contains(target) {
        return PathResult::unreachable();
    }
    if start != target && !predecessors.contains_key(target) {
        return PathResult::unreachable();
    }

    match (
        reconstruct_path(start, target, predecessors),
        distances.get(target),
    ) {
        (Some(path), Some(cost)) if !cost.is_unreachable() => PathResult {
            path,
            total_cost: *cost,
        },
        _ => PathResult::unreachable(),
    }
}
