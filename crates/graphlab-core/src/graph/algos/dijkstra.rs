use crate::graph::algos::shared::build_path_result;
use crate::graph::types::{Cost, Direction, PathResult};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost,
/// then node id so equal costs pop in lexicographic order)
#[derive(Debug, Clone)]
pub struct HeapEntry<'g> {
    pub node_id: &'g str,
    pub accumulated_cost: Cost,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .total_cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(other.node_id))
    }
}

/// State tracked during Dijkstra search
struct DijkstraState<'g> {
    settled: HashSet<&'g str>,
    heap: BinaryHeap<Reverse<HeapEntry<'g>>>,
    distances: HashMap<&'g str, Cost>,
    predecessors: HashMap<&'g str, &'g str>,
}

impl<'g> DijkstraState<'g> {
    fn new(start: &'g str) -> Self {
        let mut state = Self {
            settled: HashSet::new(),
            heap: BinaryHeap::new(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        };
        state.distances.insert(start, Cost::ZERO);
        state.heap.push(Reverse(HeapEntry {
            node_id: start,
            accumulated_cost: Cost::ZERO,
        }));
        state
    }

    fn distance(&self, node: &str) -> Cost {
        self.distances.get(node).copied().unwrap_or(Cost::MAX)
    }

    /// Relax the edge `current -> neighbor`, queueing the neighbor on improvement
    fn relax(&mut self, current: &'g str, neighbor: &'g str, weight: f64) {
        if self.settled.contains(neighbor) {
            return;
        }
        let candidate = self.distance(current).saturating_add(weight);
        if candidate < self.distance(neighbor) {
            self.distances.insert(neighbor, candidate);
            self.predecessors.insert(neighbor, current);
            self.heap.push(Reverse(HeapEntry {
                node_id: neighbor,
                accumulated_cost: candidate,
            }));
        }
    }
}

/// Find the cheapest path from `start` to `target` with Dijkstra's algorithm.
///
/// Edges are traversable in both directions. Weights are assumed
/// non-negative. The search stops as soon as `target` is settled; stale heap
/// entries are skipped on pop. An unknown or unreachable target yields
/// `{ path: [], totalCost: Cost::MAX }`.
#[tracing::instrument(skip(provider), fields(nodes = provider.nodes().len(), edges = provider.edges().len()))]
pub fn dijkstra_shortest_path(
    provider: &dyn GraphProvider,
    start: &str,
    target: &str,
) -> PathResult {
    let Some(start) = provider.nodes().iter().find(|n| *n == start) else {
        tracing::debug!("start node not in graph");
        return PathResult::unreachable();
    };
    if !provider.contains(target) {
        tracing::debug!("target node not in graph");
        return PathResult::unreachable();
    }

    let adjacency = provider.adjacency(Direction::Both);
    let mut state = DijkstraState::new(start.as_str());

    // Main Dijkstra loop
    while let Some(Reverse(HeapEntry { node_id, .. })) = state.heap.pop() {
        if !state.settled.insert(node_id) {
            continue;
        }
        if node_id == target {
            break;
        }

        for &(neighbor, weight) in adjacency.neighbors(node_id) {
            state.relax(node_id, neighbor, weight);
        }
    }

    let result = build_path_result(
        provider,
        start,
        target,
        &state.distances,
        &state.predecessors,
    );
    tracing::debug!(found = result.found(), settled = state.settled.len(), "dijkstra complete");
    result
}
