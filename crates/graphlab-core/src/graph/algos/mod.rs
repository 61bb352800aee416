//! Graph algorithm implementations
//!
//! Every algorithm is a pure function over a read-only graph:
//! - `bfs`, `dfs`: traversal order and parent map
//! - `dijkstra`, `bellman_ford`: single-source shortest path to one target
//! - `floyd_warshall`: all-pairs distance and next-hop matrices
//! - `kruskal`, `prim`: minimum spanning tree or forest
//! - `shared`: common utilities used by multiple algorithms

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;
pub mod shared;

pub use bellman_ford::bellman_ford_shortest_path;
pub use bfs::bfs_traverse;
pub use dfs::dfs_traverse;
pub use dijkstra::dijkstra_shortest_path;
pub use floyd_warshall::floyd_warshall_all_pairs;
pub use kruskal::kruskal_mst;
pub use prim::prim_mst;
pub use shared::{build_path_result, initial_parents, reconstruct_path};
