use crate::cli::support::{graph_file, graphlab, stdout_json, CHAIN, TRIANGLE};
use predicates::prelude::*;

#[test]
fn test_kruskal_cities_json() {
    let output = graphlab()
        .args(["--format", "json", "kruskal", "sample:cities"])
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["totalCost"], 570.0);
    assert_eq!(value["edges"].as_array().unwrap().len(), 9);
}

#[test]
fn test_prim_matches_kruskal_on_cities() {
    graphlab()
        .args(["prim", "sample:cities", "--start", "Lyon"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Prim spanning tree from Lyon: 9 edges, total cost 570",
        ));
}

#[test]
fn test_kruskal_records() {
    let (_dir, path) = graph_file(TRIANGLE);
    graphlab()
        .args(["--format", "records", "kruskal", &path])
        .assert()
        .success()
        .stdout("H graphlab=1 records=1 mode=kruskal edges=2 cost=3 spanning=true\nE A B 1\nE B C 2\n");
}

#[test]
fn test_kruskal_disconnected_graph() {
    let (_dir, path) = graph_file(CHAIN);
    graphlab()
        .args(["kruskal", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 edges, total cost 6"))
        .stdout(predicate::str::contains("Not spanning: 4 of 5 nodes"));
}

#[test]
fn test_prim_unknown_start_is_empty() {
    let (_dir, path) = graph_file(TRIANGLE);
    let output = graphlab()
        .args(["--format", "json", "prim", &path, "--start", "Q"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["edges"], serde_json::json!([]));
    assert_eq!(value["totalCost"], 0.0);
}
