use crate::cli::support::{graph_file, graphlab, stdout_json, NEGATIVE_CYCLE, TRIANGLE};
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_floyd_warshall_table() {
    let (_dir, path) = graph_file(TRIANGLE);
    graphlab()
        .args(["floyd-warshall", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Floyd-Warshall distances (3 nodes"))
        .stdout(predicate::str::contains("A  0  1  3"));
}

#[test]
fn test_floyd_warshall_json_matrices() {
    let (_dir, path) = graph_file(TRIANGLE);
    let output = graphlab()
        .args(["--format", "json", "floyd-warshall", &path])
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["nodes"], json!(["A", "B", "C"]));
    assert_eq!(value["distances"][0], json!([0.0, 1.0, 3.0]));
    assert_eq!(value["next"][0][1], "B");
    assert_eq!(value["hasNegativeCycle"], false);
}

#[test]
fn test_floyd_warshall_pair() {
    let output = graphlab()
        .args([
            "--format",
            "json",
            "floyd-warshall",
            "sample:cities",
            "--from",
            "Rennes",
            "--to",
            "Grenoble",
        ])
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["from"], "Rennes");
    assert_eq!(value["to"], "Grenoble");
    assert_eq!(value["totalCost"], 245.0);
}

#[test]
fn test_floyd_warshall_from_requires_to() {
    graphlab()
        .args(["floyd-warshall", "sample:cities", "--from", "Rennes"])
        .assert()
        .code(2);
}

#[test]
fn test_floyd_warshall_negative_cycle() {
    let (_dir, path) = graph_file(NEGATIVE_CYCLE);
    graphlab()
        .args(["floyd-warshall", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: the graph contains a negative cycle",
        ));
}

#[test]
fn test_floyd_warshall_records() {
    graphlab()
        .args(["--format", "records", "floyd-warshall", "sample:negative"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphlab=1 records=1 mode=floyd-warshall nodes=6 negative_cycle=false\n",
        ))
        .stdout(predicate::str::contains("D dist s1 s4 9"));
}
