use crate::cli::support::{graph_file, graphlab, stdout_json, CHAIN, NEGATIVE_CYCLE};
use predicates::prelude::*;
use serde_json::json;

// ============================================================================
// Dijkstra
// ============================================================================

#[test]
fn test_dijkstra_cities_human() {
    graphlab()
        .args(["dijkstra", "sample:cities", "--start", "Rennes", "--target", "Grenoble"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dijkstra: Rennes -> Paris -> Dijon -> Grenoble",
        ))
        .stdout(predicate::str::contains("Cost: 245 (3 hops)"));
}

#[test]
fn test_dijkstra_json_shape() {
    let output = graphlab()
        .args(["--format", "json", "dijkstra", "sample:cities", "-s", "Rennes", "-t", "Grenoble"])
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["path"], json!(["Rennes", "Paris", "Dijon", "Grenoble"]));
    assert_eq!(value["totalCost"], 245.0);
}

#[test]
fn test_dijkstra_unreachable_target() {
    let (_dir, path) = graph_file(CHAIN);
    graphlab()
        .args(["dijkstra", &path, "--start", "A", "--target", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra: no path from A to Z"));

    let output = graphlab()
        .args(["--format", "json", "dijkstra", &path, "--start", "A", "--target", "Z"])
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["path"], json!([]));
    assert_eq!(value["totalCost"], f64::MAX);
}

#[test]
fn test_dijkstra_records() {
    let (_dir, path) = graph_file(CHAIN);
    graphlab()
        .args(["--format", "records", "dijkstra", &path, "-s", "A", "-t", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=dijkstra start=A target=D"))
        .stdout(predicate::str::contains("P 6 A B C D"));
}

#[test]
fn test_dijkstra_requires_target() {
    graphlab()
        .args(["dijkstra", "sample:cities", "--start", "Rennes"])
        .assert()
        .code(2);
}

// ============================================================================
// Bellman-Ford
// ============================================================================

#[test]
fn test_bellman_ford_negative_weights() {
    let output = graphlab()
        .args(["--format", "json", "bellman-ford", "sample:negative", "-s", "s1", "-t", "s4"])
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["path"], json!(["s1", "s5", "s3", "s4"]));
    assert_eq!(value["totalCost"], 9.0);
    assert_eq!(value["hasNegativeCycle"], false);
}

#[test]
fn test_bellman_ford_node_distances_json() {
    let output = graphlab()
        .args(["--format", "json", "bellman-ford", "sample:negative", "-s", "s1", "-t", "s4"])
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(
        value["distances"],
        json!({"s1": 0.0, "s2": 3.0, "s3": 6.0, "s4": 9.0, "s5": 7.0, "s6": 8.0})
    );
    assert_eq!(value["parents"]["s1"], json!(null));
    assert_eq!(value["parents"]["s2"], "s5");
    assert_eq!(value["parents"]["s6"], "s2");
}

#[test]
fn test_bellman_ford_negative_cycle_json() {
    let (_dir, path) = graph_file(NEGATIVE_CYCLE);
    let output = graphlab()
        .args(["--format", "json", "bellman-ford", &path, "-s", "A", "-t", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["path"], json!([]));
    assert_eq!(value["hasNegativeCycle"], true);
    assert_eq!(value["totalCost"], f64::MIN);
}

#[test]
fn test_bellman_ford_negative_cycle_human() {
    let (_dir, path) = graph_file(NEGATIVE_CYCLE);
    graphlab()
        .args(["bellman-ford", &path, "-s", "A", "-t", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arbitrarily cheap"))
        .stdout(predicate::str::contains(
            "Warning: a negative cycle is reachable from A",
        ));
}

#[test]
fn test_bellman_ford_negative_cycle_records() {
    let (_dir, path) = graph_file(NEGATIVE_CYCLE);
    graphlab()
        .args(["--format", "records", "bellman-ford", &path, "-s", "A", "-t", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("negative_cycle=true"))
        .stdout(predicate::str::contains("P -inf"));
}
