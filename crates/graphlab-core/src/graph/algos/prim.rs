use crate::graph::model::Edge;
use crate::graph::types::MSTResult;
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// Cheapest edge with exactly one endpoint in `visited`; the first one in
/// edge order wins ties
fn lightest_crossing_edge<'g>(edges: &'g [Edge], visited: &HashSet<&str>) -> Option<&'g Edge> {
    let mut best: Option<&Edge> = None;
    for edge in edges {
        let crosses = visited.contains(edge.from.as_str()) != visited.contains(edge.to.as_str());
        if crosses && best.is_none_or(|b| edge.weight < b.weight) {
            best = Some(edge);
        }
    }
    best
}

/// Grow a minimum spanning tree from `start` with Prim's algorithm.
///
/// Orientation is ignored. Each step scans every edge for the lightest one
/// leaving the visited set, so edges come out in growth order: every edge
/// shares an endpoint with an earlier one or with `start`. On a
/// disconnected graph only the component of `start` is spanned. An unknown
/// start yields an empty tree.
#[tracing::instrument(skip(provider), fields(nodes = provider.nodes().len(), edges = provider.edges().len()))]
pub fn prim_mst(provider: &dyn GraphProvider, start: &str) -> MSTResult {
    let Some(start) = provider.nodes().iter().find(|n| *n == start) else {
        tracing::debug!("start node not in graph");
        return MSTResult::empty();
    };

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(start.as_str());
    let mut mst = MSTResult::empty();

    while visited.len() < provider.nodes().len() {
        let Some(edge) = lightest_crossing_edge(provider.edges(), &visited) else {
            tracing::debug!(
                spanned = visited.len(),
                "no crossing edge left, returning a partial tree"
            );
            break;
        };
        visited.insert(edge.from.as_str());
        visited.insert(edge.to.as_str());
        mst.push(edge.clone());
    }

    mst
}
