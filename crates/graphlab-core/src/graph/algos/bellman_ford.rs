use crate::graph::algos::shared::{build_path_result, initial_parents};
use crate::graph::model::NodeId;
use crate::graph::types::{BellmanFordResult, Cost, Direction, PathResult};
use crate::graph::{Adjacency, GraphProvider};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

/// A directed arc `(from, to, weight)` derived from the edge list
type Arc<'g> = (&'g str, &'g str, f64);

/// Directed arcs respecting orientation: undirected edges contribute both
/// directions
fn build_arcs(provider: &dyn GraphProvider) -> Vec<Arc<'_>> {
    let oriented = provider.is_oriented();
    let mut arcs = Vec::with_capacity(provider.edges().len() * 2);
    for edge in provider.edges() {
        arcs.push((edge.from.as_str(), edge.to.as_str(), edge.weight));
        if !oriented {
            arcs.push((edge.to.as_str(), edge.from.as_str(), edge.weight));
        }
    }
    arcs
}

/// Distances and predecessors during relaxation
struct Relaxation<'g> {
    distances: HashMap<&'g str, Cost>,
    predecessors: HashMap<&'g str, &'g str>,
}

impl<'g> Relaxation<'g> {
    fn new(start: &'g str) -> Self {
        let mut distances = HashMap::new();
        distances.insert(start, Cost::ZERO);
        Self {
            distances,
            predecessors: HashMap::new(),
        }
    }

    /// Tentative distance through `arc`, if its tail has been reached and
    /// the result improves on the head's current distance
    fn improvement(&self, arc: &Arc<'g>) -> Option<Cost> {
        let (from, to, weight) = *arc;
        let base = self.distances.get(from)?;
        let candidate = base.saturating_add(weight);
        let current = self.distances.get(to).copied().unwrap_or(Cost::MAX);
        (candidate < current).then_some(candidate)
    }

    /// One full pass over every arc; returns whether any distance changed
    fn pass(&mut self, arcs: &[Arc<'g>]) -> bool {
        let mut changed = false;
        for arc in arcs {
            if let Some(candidate) = self.improvement(arc) {
                self.distances.insert(arc.1, candidate);
                self.predecessors.insert(arc.1, arc.0);
                changed = true;
            }
        }
        changed
    }
}

/// Nodes whose distance is unbounded below: every node still improvable
/// after `|V| - 1` passes, plus everything reachable from one of them.
fn unbounded_nodes<'g>(
    relaxation: &Relaxation<'g>,
    arcs: &[Arc<'g>],
    adjacency: &Adjacency<'g>,
) -> HashSet<&'g str> {
    let mut unbounded: HashSet<&'g str> = arcs
        .iter()
        .filter(|arc| relaxation.improvement(arc).is_some())
        .map(|arc| arc.1)
        .collect();

    let mut queue: VecDeque<&'g str> = unbounded.iter().copied().collect();
    while let Some(node) = queue.pop_front() {
        for &(next, _) in adjacency.neighbors(node) {
            if unbounded.insert(next) {
                queue.push_back(next);
            }
        }
    }
    unbounded
}

/// Per-node distances and parents for the result
fn node_maps(
    nodes: &[NodeId],
    relaxation: &Relaxation,
    unbounded: &HashSet<&str>,
) -> (BTreeMap<NodeId, Cost>, BTreeMap<NodeId, Option<NodeId>>) {
    let mut distances = BTreeMap::new();
    let mut parents = initial_parents(nodes);
    for node in nodes {
        let id = node.as_str();
        if unbounded.contains(id) {
            distances.insert(node.clone(), Cost::MIN);
            continue;
        }
        let distance = relaxation.distances.get(id).copied().unwrap_or(Cost::MAX);
        distances.insert(node.clone(), distance);
        if let Some(parent) = relaxation.predecessors.get(id) {
            parents.insert(node.clone(), Some(parent.to_string()));
        }
    }
    (distances, parents)
}

/// Find the cheapest path from `start` to `target`, allowing negative weights.
///
/// Runs at most `|V| - 1` relaxation passes over the directed arcs
/// (stopping early once a pass changes nothing), then checks once more for
/// improvable arcs to detect negative cycles reachable from `start`.
///
/// - `hasNegativeCycle` is set whenever such a cycle exists.
/// - A target on or downstream of a negative cycle gets an empty path and
///   `Cost::MIN`; its cost is never reported as a finite number.
/// - An unknown or unreachable target gets an empty path and `Cost::MAX`.
///
/// Undirected edges are relaxed both ways, so a single negative undirected
/// edge is itself a negative cycle.
#[tracing::instrument(skip(provider), fields(nodes = provider.nodes().len(), edges = provider.edges().len(), oriented = provider.is_oriented()))]
pub fn bellman_ford_shortest_path(
    provider: &dyn GraphProvider,
    start: &str,
    target: &str,
) -> BellmanFordResult {
    let Some(start) = provider.nodes().iter().find(|n| *n == start) else {
        tracing::debug!("start node not in graph");
        return BellmanFordResult {
            result: PathResult::unreachable(),
            has_negative_cycle: false,
            distances: provider.nodes().iter().map(|n| (n.clone(), Cost::MAX)).collect(),
            parents: initial_parents(provider.nodes()),
        };
    };

    let arcs = build_arcs(provider);
    let mut relaxation = Relaxation::new(start.as_str());

    let max_passes = provider.nodes().len().saturating_sub(1);
    let mut passes = 0;
    while passes < max_passes && relaxation.pass(&arcs) {
        passes += 1;
    }

    let adjacency = provider.adjacency(Direction::for_orientation(provider.is_oriented()));
    let unbounded = unbounded_nodes(&relaxation, &arcs, &adjacency);
    let has_negative_cycle = !unbounded.is_empty();
    tracing::debug!(passes, has_negative_cycle, "relaxation complete");

    let result = if unbounded.contains(target) {
        tracing::debug!("target is affected by a negative cycle");
        PathResult::unbounded()
    } else {
        build_path_result(
            provider,
            start,
            target,
            &relaxation.distances,
            &relaxation.predecessors,
        )
    };

    let (distances, parents) = node_maps(provider.nodes(), &relaxation, &unbounded);
    BellmanFordResult {
        result,
        has_negative_cycle,
        distances,
        parents,
    }
}
