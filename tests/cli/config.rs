use crate::cli::support::{graphlab, stdout_json, write_file};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_default_format_from_working_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("graphlab.toml"), "default_format = \"json\"\n").unwrap();

    let output = graphlab()
        .current_dir(dir.path())
        .args(["kruskal", "sample:cities"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["totalCost"], 570.0);
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("graphlab.toml"), "default_format = \"json\"\n").unwrap();

    graphlab()
        .current_dir(dir.path())
        .args(["--format", "human", "kruskal", "sample:cities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kruskal spanning tree: 9 edges"));
}

#[test]
fn test_explicit_config_path() {
    let (_dir, path) = write_file("lab.toml", "default_format = \"records\"\n");
    graphlab()
        .args(["--config", path.to_str().unwrap(), "validate", "sample:cities"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H graphlab=1 records=1 mode=validate"));
}

#[test]
fn test_config_from_env() {
    let (_dir, path) = write_file("lab.toml", "default_format = \"records\"\n");
    graphlab()
        .env("GRAPHLAB_CONFIG", &path)
        .args(["sample"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H graphlab=1 records=1 mode=sample"));
}

#[test]
fn test_config_allow_empty_graph() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("graphlab.toml"),
        "[validation]\nallow_empty = true\n",
    )
    .unwrap();
    fs::write(dir.path().join("empty.json"), r#"{"nodes":[]}"#).unwrap();

    graphlab()
        .current_dir(dir.path())
        .args(["kruskal", "empty.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 edges, total cost 0"));
}

#[test]
fn test_config_precision() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("graphlab.toml"), "[output]\nprecision = 1\n").unwrap();
    fs::write(
        dir.path().join("g.json"),
        r#"{"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":1.26}]}"#,
    )
    .unwrap();

    graphlab()
        .current_dir(dir.path())
        .args(["dijkstra", "g.json", "-s", "A", "-t", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost: 1.3 (1 hop)"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("graphlab.toml"), "default_format = [").unwrap();

    graphlab()
        .current_dir(dir.path())
        .args(["sample"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_config_default_format_json_errors() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("graphlab.toml"), "default_format = \"json\"\n").unwrap();

    let output = graphlab()
        .current_dir(dir.path())
        .args(["kruskal", "sample:nope"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let envelope: serde_json::Value =
        serde_json::from_str(stderr.lines().last().unwrap()).unwrap();
    assert_eq!(envelope["error"]["type"], "unknown_sample");
    assert_eq!(envelope["error"]["code"], 3);
}

#[test]
fn test_format_flag_overrides_config_for_errors() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("graphlab.toml"), "default_format = \"json\"\n").unwrap();

    graphlab()
        .current_dir(dir.path())
        .args(["--format", "human", "kruskal", "sample:nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::starts_with("error: "));
}
