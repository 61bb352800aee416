use std::collections::HashMap;

use crate::graph::model::{Edge, Graph, NodeId};
use crate::graph::types::Direction;

/// Sorted neighbor lists for every node, built in one pass over the edges.
///
/// Lists are ordered lexicographically by neighbor id. The sort is stable,
/// so parallel edges keep their input order; callers skip visited nodes.
#[derive(Debug, Clone)]
pub struct Adjacency<'g> {
    lists: HashMap<&'g str, Vec<(&'g str, f64)>>,
}

impl<'g> Adjacency<'g> {
    fn build(nodes: &'g [NodeId], edges: &'g [Edge], direction: Direction) -> Self {
        let mut lists: HashMap<&'g str, Vec<(&'g str, f64)>> = nodes
            .iter()
            .map(|n| (n.as_str(), Vec::new()))
            .collect();

        for edge in edges {
            let (from, to) = (edge.from.as_str(), edge.to.as_str());
            let mut link = |a: &'g str, b: &'g str| {
                lists.entry(a).or_default().push((b, edge.weight));
            };
            match direction {
                Direction::Out => link(from, to),
                Direction::In => link(to, from),
                Direction::Both => {
                    link(from, to);
                    // a self-loop is listed once
                    if from != to {
                        link(to, from);
                    }
                }
            }
        }

        for list in lists.values_mut() {
            list.sort_by(|a, b| a.0.cmp(b.0));
        }
        Self { lists }
    }

    /// Neighbors of `id` with the connecting edge weight; empty for unknown ids
    pub fn neighbors(&self, id: &str) -> &[(&'g str, f64)] {
        self.lists.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Trait for providing graph adjacency to the algorithms
pub trait GraphProvider {
    fn nodes(&self) -> &[NodeId];
    fn edges(&self) -> &[Edge];
    fn is_oriented(&self) -> bool;

    fn contains(&self, id: &str) -> bool {
        self.nodes().iter().any(|n| n == id)
    }

    /// Neighbor lists for the given direction. Built once per algorithm run
    /// so each expansion is a lookup instead of an edge scan.
    fn adjacency(&self, direction: Direction) -> Adjacency<'_> {
        Adjacency::build(self.nodes(), self.edges(), direction)
    }
}

impl GraphProvider for Graph {
    fn nodes(&self) -> &[NodeId] {
        Graph::nodes(self)
    }

    fn edges(&self) -> &[Edge] {
        Graph::edges(self)
    }

    fn is_oriented(&self) -> bool {
        Graph::is_oriented(self)
    }

    fn contains(&self, id: &str) -> bool {
        Graph::contains(self, id)
    }
}
