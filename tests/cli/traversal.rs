use crate::cli::support::{graph_file, graphlab, stdout_json, write_file, CHAIN};
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_bfs_human() {
    let (_dir, path) = graph_file(CHAIN);
    graphlab()
        .args(["bfs", &path, "--start", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from A: visited 4 of 5 nodes"))
        .stdout(predicate::str::contains("D  (from C)"))
        .stdout(predicate::str::contains("Not reached: Z"));
}

#[test]
fn test_bfs_json_shape() {
    let (_dir, path) = graph_file(CHAIN);
    let output = graphlab()
        .args(["--format", "json", "bfs", &path, "--start", "B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["order"][0], "B");
    assert_eq!(value["order"].as_array().unwrap().len(), 4);
    assert_eq!(value["parents"]["B"], json!(null));
    assert_eq!(value["parents"]["D"], "C");
    assert_eq!(value["parents"]["Z"], json!(null));
}

#[test]
fn test_bfs_respects_orientation() {
    // s4 has no outgoing edge in the oriented sample
    let output = graphlab()
        .args(["--format", "json", "bfs", "sample:negative", "--start", "s4"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["order"], json!(["s4"]));
}

#[test]
fn test_dfs_ignores_orientation() {
    let output = graphlab()
        .args(["--format", "json", "dfs", "sample:negative", "--start", "s4"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["order"].as_array().unwrap().len(), 6);
}

#[test]
fn test_dfs_records() {
    let (_dir, path) = graph_file(CHAIN);
    graphlab()
        .args(["--format", "records", "dfs", &path, "--start", "A"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphlab=1 records=1 mode=dfs start=A visited=4 nodes=5\n",
        ))
        .stdout(predicate::str::contains("N 0 A parent=-"))
        .stdout(predicate::str::contains("N 3 D parent=C"));
}

#[test]
fn test_unknown_start_is_not_an_error() {
    let (_dir, path) = graph_file(CHAIN);
    graphlab()
        .args(["bfs", &path, "--start", "Q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start node 'Q' is not in the graph"));
}

#[test]
fn test_graph_from_stdin() {
    graphlab()
        .args(["--format", "json", "bfs", "-", "--start", "C"])
        .write_stdin(CHAIN)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"order\""));
}

#[test]
fn test_graph_from_yaml_file() {
    let yaml = "nodes: [A, B]\nisOriented: true\nedges:\n  - {from: B, to: A, weight: 2}\n";
    let (_dir, path) = write_file("graph.yaml", yaml);
    graphlab()
        .args(["bfs", path.to_str().unwrap(), "--start", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visited 2 of 2 nodes"));
}
