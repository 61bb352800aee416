pub mod support;

mod all_pairs;
mod config;
mod logging;
mod request;
mod sample;
mod shortest_path;
mod spanning_tree;
mod traversal;
mod validate;
