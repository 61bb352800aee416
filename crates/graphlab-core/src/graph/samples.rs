//! Built-in sample graphs
//!
//! - `cities`: ten French cities joined by road distances (undirected)
//! - `negative`: six nodes with negative weights but no negative cycle
//!   (oriented), the classic Bellman-Ford exercise

use crate::error::{GraphLabError, Result};
use crate::graph::model::{Edge, Graph};

const CITIES_NODES: &[&str] = &[
    "Rennes", "Nantes", "Bordeaux", "Caen", "Paris", "Lille", "Nancy", "Dijon", "Lyon", "Grenoble",
];

const CITIES_EDGES: &[(&str, &str, f64)] = &[
    ("Rennes", "Bordeaux", 130.0),
    ("Rennes", "Nantes", 45.0),
    ("Rennes", "Paris", 110.0),
    ("Rennes", "Caen", 75.0),
    ("Bordeaux", "Lyon", 100.0),
    ("Bordeaux", "Nantes", 90.0),
    ("Bordeaux", "Paris", 150.0),
    ("Nantes", "Paris", 80.0),
    ("Caen", "Paris", 50.0),
    ("Caen", "Lille", 65.0),
    ("Paris", "Lille", 70.0),
    ("Paris", "Dijon", 60.0),
    ("Dijon", "Lyon", 70.0),
    ("Dijon", "Grenoble", 75.0),
    ("Dijon", "Lille", 120.0),
    ("Dijon", "Nancy", 75.0),
    ("Lille", "Nancy", 100.0),
    ("Nancy", "Grenoble", 80.0),
    ("Nancy", "Lyon", 90.0),
    ("Lyon", "Grenoble", 40.0),
];

const NEGATIVE_NODES: &[&str] = &["s1", "s2", "s3", "s4", "s5", "s6"];

const NEGATIVE_EDGES: &[(&str, &str, f64)] = &[
    ("s1", "s2", 4.0),
    ("s1", "s5", 7.0),
    ("s2", "s3", 3.0),
    ("s2", "s6", 5.0),
    ("s3", "s4", 3.0),
    ("s3", "s5", 2.0),
    ("s3", "s6", 6.0),
    ("s5", "s2", -4.0),
    ("s5", "s3", -1.0),
    ("s5", "s6", 3.0),
    ("s6", "s3", -2.0),
    ("s6", "s4", 2.0),
];

/// Names accepted by [`get`]
pub fn names() -> &'static [&'static str] {
    &["cities", "negative"]
}

/// One-line description of a sample
pub fn describe(name: &str) -> Option<&'static str> {
    match name {
        "cities" => Some("10 French cities, undirected road distances"),
        "negative" => Some("6 nodes, oriented, negative weights without a negative cycle"),
        _ => None,
    }
}

fn build(nodes: &[&str], edges: &[(&str, &str, f64)], is_oriented: bool) -> Result<Graph> {
    Graph::new(
        nodes.iter().map(|n| n.to_string()).collect(),
        edges
            .iter()
            .map(|(from, to, weight)| Edge::new(*from, *to, *weight))
            .collect(),
        is_oriented,
    )
}

/// Build a sample graph by name
pub fn get(name: &str) -> Result<Graph> {
    match name {
        "cities" => build(CITIES_NODES, CITIES_EDGES, false),
        "negative" => build(NEGATIVE_NODES, NEGATIVE_EDGES, true),
        other => Err(GraphLabError::UnknownSample(other.to_string())),
    }
}
