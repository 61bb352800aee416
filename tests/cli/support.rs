use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for graphlab
pub fn graphlab() -> Command {
    cargo_bin_cmd!("graphlab")
}

/// A - B - C - D path plus an isolated Z
pub const CHAIN: &str = r#"{
  "nodes": ["A", "B", "C", "D", "Z"],
  "edges": [
    {"from": "A", "to": "B", "weight": 1},
    {"from": "B", "to": "C", "weight": 2},
    {"from": "C", "to": "D", "weight": 3}
  ]
}"#;

/// Triangle whose direct A - C edge ties with the detour through B
pub const TRIANGLE: &str = r#"{
  "nodes": ["A", "B", "C"],
  "edges": [
    {"from": "A", "to": "B", "weight": 1},
    {"from": "B", "to": "C", "weight": 2},
    {"from": "A", "to": "C", "weight": 3}
  ]
}"#;

/// Oriented two-node cycle with negative total weight
pub const NEGATIVE_CYCLE: &str = r#"{
  "nodes": ["A", "B", "C"],
  "isOriented": true,
  "edges": [
    {"from": "A", "to": "B", "weight": 1},
    {"from": "B", "to": "C", "weight": -3},
    {"from": "C", "to": "B", "weight": 1}
  ]
}"#;

/// Write `content` to `name` inside a fresh temp dir
///
/// The dir is returned so it outlives the command using the file.
pub fn write_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Write a graph document and return its path as a CLI argument
pub fn graph_file(content: &str) -> (TempDir, String) {
    let (dir, path) = write_file("graph.json", content);
    (dir, path.to_string_lossy().into_owned())
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}
