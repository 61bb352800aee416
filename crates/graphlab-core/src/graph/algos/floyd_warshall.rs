use crate::graph::model::NodeId;
use crate::graph::types::{AllPairsResult, Cost};
use crate::graph::GraphProvider;
use crate::trace_time;
use std::collections::HashMap;
use std::time::Instant;

/// Distance and next-hop matrices indexed by node position
struct Matrices {
    dist: Vec<Vec<Cost>>,
    next: Vec<Vec<Option<usize>>>,
}

impl Matrices {
    fn new(n: usize) -> Self {
        let mut dist = vec![vec![Cost::MAX; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Cost::ZERO;
        }
        Self {
            dist,
            next: vec![vec![None; n]; n],
        }
    }

    /// Seed a direct edge, keeping the lightest of parallel edges
    fn seed(&mut self, from: usize, to: usize, weight: f64) {
        let weight = Cost::new(weight);
        if weight < self.dist[from][to] {
            self.dist[from][to] = weight;
            self.next[from][to] = Some(to);
        }
    }

    /// Relax every pair through intermediate `k`
    fn relax_through(&mut self, k: usize) {
        let n = self.dist.len();
        for i in 0..n {
            let via = self.dist[i][k];
            if via.is_unreachable() {
                continue;
            }
            for j in 0..n {
                let tail = self.dist[k][j];
                if tail.is_unreachable() {
                    continue;
                }
                let candidate = via + tail;
                if candidate < self.dist[i][j] {
                    self.dist[i][j] = candidate;
                    self.next[i][j] = self.next[i][k];
                }
            }
        }
    }
}

/// Compute shortest distances between every ordered pair of nodes.
///
/// Rows and columns follow the order of `provider.nodes()`. Oriented graphs
/// seed `from -> to` only; undirected graphs seed both directions. Parallel
/// edges keep the lightest weight, and a non-negative self-loop never
/// displaces the zero diagonal, so `next[i][i]` stays `None` unless a
/// negative cycle runs through `i`.
///
/// `distances[i][j]` is `Cost::MAX` when `j` is unreachable from `i`. When
/// some diagonal entry ends up negative, `hasNegativeCycle` is set and the
/// distances of pairs routed through that cycle are not meaningful.
#[tracing::instrument(skip(provider), fields(nodes = provider.nodes().len(), edges = provider.edges().len(), oriented = provider.is_oriented()))]
pub fn floyd_warshall_all_pairs(provider: &dyn GraphProvider) -> AllPairsResult {
    let nodes = provider.nodes();
    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.as_str(), i))
        .collect();

    let mut matrices = Matrices::new(nodes.len());
    for edge in provider.edges() {
        let (Some(&from), Some(&to)) = (index.get(edge.from.as_str()), index.get(edge.to.as_str()))
        else {
            continue;
        };
        matrices.seed(from, to, edge.weight);
        if !provider.is_oriented() {
            matrices.seed(to, from, edge.weight);
        }
    }

    let start = Instant::now();
    for k in 0..nodes.len() {
        matrices.relax_through(k);
    }
    trace_time!(start, "floyd_warshall_relaxation");

    let has_negative_cycle = (0..nodes.len()).any(|i| matrices.dist[i][i] < Cost::ZERO);
    if has_negative_cycle {
        tracing::debug!("negative cycle detected on the diagonal");
    }

    let next: Vec<Vec<Option<NodeId>>> = matrices
        .next
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|hop| hop.map(|j| nodes[j].clone()))
                .collect()
        })
        .collect();

    AllPairsResult {
        nodes: nodes.to_vec(),
        distances: matrices.dist,
        next,
        has_negative_cycle,
    }
}
