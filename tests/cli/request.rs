use crate::cli::support::{graphlab, stdout_json, write_file};
use predicates::prelude::*;
use serde_json::json;

const BODY: &str = r#"{
  "graph": {
    "nodes": ["A", "B", "C"],
    "edges": [
      {"from": "A", "to": "B", "weight": 1},
      {"from": "B", "to": "C", "weight": 2},
      {"from": "A", "to": "C", "weight": 5}
    ]
  },
  "start": "A",
  "target": "C"
}"#;

#[test]
fn test_request_from_file() {
    let (_dir, path) = write_file("request.json", BODY);
    let output = graphlab()
        .args(["--format", "json", "request", "dijkstra", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["path"], json!(["A", "B", "C"]));
    assert_eq!(value["totalCost"], 3.0);
}

#[test]
fn test_request_from_stdin() {
    graphlab()
        .args(["request", "bfs", "-"])
        .write_stdin(BODY)
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from A: visited 3 of 3 nodes"));
}

#[test]
fn test_request_algorithm_spellings() {
    for name in ["bellman-ford", "bellmanford", "bellman_ford"] {
        graphlab()
            .args(["--format", "json", "request", name, "-"])
            .write_stdin(BODY)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"hasNegativeCycle\": false"));
    }
}

#[test]
fn test_request_ignores_unused_fields() {
    graphlab()
        .args(["--format", "json", "request", "kruskal", "-"])
        .write_stdin(BODY)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalCost\": 3.0"));
}

#[test]
fn test_request_missing_target() {
    let body = r#"{"graph":{"nodes":["A"]},"start":"A"}"#;
    graphlab()
        .args(["request", "dijkstra", "-"])
        .write_stdin(body)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("requires a target node"));
}

#[test]
fn test_request_unknown_algorithm() {
    graphlab()
        .args(["request", "astar", "-"])
        .write_stdin(BODY)
        .assert()
        .code(2);
}

#[test]
fn test_request_body_must_be_object() {
    graphlab()
        .args(["--format", "json", "request", "bfs", "-"])
        .write_stdin("[1, 2]")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_request_invalid_graph() {
    let body = r#"{"graph":{"nodes":["A"],"edges":[{"from":"A","to":"B","weight":1}]},"start":"A"}"#;
    graphlab()
        .args(["request", "bfs", "-"])
        .write_stdin(body)
        .assert()
        .code(3);
}
