use crate::cli::support::{graph_file, graphlab, stdout_json, CHAIN};
use predicates::prelude::*;

#[test]
fn test_validate_human() {
    let (_dir, path) = graph_file(CHAIN);
    graphlab()
        .args(["validate", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Valid graph: 5 nodes, 3 edges, undirected",
        ))
        .stdout(predicate::str::contains("Isolated nodes: Z"));
}

#[test]
fn test_validate_json() {
    let output = graphlab()
        .args(["--format", "json", "validate", "sample:negative"])
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["valid"], true);
    assert_eq!(value["nodes"], 6);
    assert_eq!(value["edges"], 12);
    assert_eq!(value["isOriented"], true);
    assert_eq!(value["hasNegativeWeight"], true);
}

#[test]
fn test_validate_records() {
    graphlab()
        .args(["--format", "records", "validate", "sample:cities"])
        .assert()
        .success()
        .stdout("H graphlab=1 records=1 mode=validate nodes=10 edges=20 oriented=false negative_weights=false self_loops=0\n");
}

#[test]
fn test_validate_quiet_prints_nothing() {
    let (_dir, path) = graph_file(CHAIN);
    graphlab()
        .args(["--quiet", "validate", &path])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_validate_lenient_input() {
    let (_dir, path) = graph_file(
        r#"{"nodes":[" A ","B","B"],"edges":[{"from":"A","to":" B","w":"2.5"}]}"#,
    );
    graphlab()
        .args(["validate", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid graph: 2 nodes, 1 edge, undirected"));
}

#[test]
fn test_validate_missing_weight() {
    let (_dir, path) = graph_file(r#"{"nodes":["A","B"],"edges":[{"from":"A","to":"B"}]}"#);
    graphlab()
        .args(["validate", &path])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing or non-numeric weight"));
}

#[test]
fn test_validate_empty_graph() {
    let (_dir, path) = graph_file(r#"{"nodes":[],"edges":[]}"#);
    graphlab()
        .args(["validate", &path])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph has no nodes"));
}
