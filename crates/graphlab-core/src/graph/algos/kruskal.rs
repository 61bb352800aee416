use crate::graph::types::MSTResult;
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// Disjoint-set forest over node positions, with path compression and
/// union by rank
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the sets of `x` and `y`; false when they were already joined
    fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        true
    }
}

/// Compute a minimum spanning forest with Kruskal's algorithm.
///
/// Orientation is ignored. Edges are considered by ascending weight; the
/// sort is stable, so among equal weights the earlier edge in the input wins.
/// Self-loops never join two components and are always discarded. Selected
/// edges keep their original `from`/`to` and appear in selection order.
#[tracing::instrument(skip(provider), fields(nodes = provider.nodes().len(), edges = provider.edges().len()))]
pub fn kruskal_mst(provider: &dyn GraphProvider) -> MSTResult {
    let index: HashMap<&str, usize> = provider
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, n)| (n.as_str(), i))
        .collect();

    let mut sorted: Vec<_> = provider.edges().iter().collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut components = UnionFind::new(index.len());
    let mut mst = MSTResult::empty();
    for edge in sorted {
        let (Some(&from), Some(&to)) = (index.get(edge.from.as_str()), index.get(edge.to.as_str()))
        else {
            continue;
        };
        if components.union(from, to) {
            mst.push(edge.clone());
        }
    }

    let trees = provider.nodes().len().saturating_sub(mst.edges.len());
    if trees > 1 {
        tracing::debug!(trees, "graph is disconnected, returning a spanning forest");
    }
    mst
}
