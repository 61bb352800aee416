//! Graph model and algorithms
//!
//! Provides the shared weighted graph and the classical algorithms over it:
//! - BFS and DFS traversal
//! - Dijkstra and Bellman-Ford single-source shortest paths
//! - Floyd-Warshall all-pairs shortest paths
//! - Kruskal and Prim minimum spanning trees
//! - Graph provider trait for pluggable adjacency

pub mod algos;
pub mod load;
pub mod model;
pub mod samples;
pub mod traversal;
pub mod types;

pub use algos::{
    bellman_ford_shortest_path, bfs_traverse, dfs_traverse, dijkstra_shortest_path,
    floyd_warshall_all_pairs, kruskal_mst, prim_mst,
};
pub use load::{load_graph, normalize_graph, parse_graph, InputSyntax};
pub use model::{Edge, Graph, NodeId};
pub use traversal::{Adjacency, GraphProvider};
pub use types::{
    AllPairsResult, BellmanFordResult, Cost, Direction, MSTResult, PathResult, TraversalResult,
};
