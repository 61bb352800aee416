use crate::cli::support::graphlab;
use predicates::prelude::*;

// ============================================================================
// Logging goes to stderr, never into command output
// ============================================================================

#[test]
fn test_verbose_shows_debug_messages() {
    graphlab()
        .args(["--verbose", "kruskal", "sample:cities"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_level_debug_shows_debug_messages() {
    graphlab()
        .args(["--log-level", "debug", "sample"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    graphlab()
        .args(["kruskal", "sample:cities"])
        .env_remove("RUST_LOG")
        .env_remove("GRAPHLAB_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_unknown_start_warns_on_stderr() {
    graphlab()
        .args(["bfs", "sample:cities", "--start", "Brest"])
        .env_remove("RUST_LOG")
        .env_remove("GRAPHLAB_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("start node is not in the graph"));
}

#[test]
fn test_log_json_emits_json_lines() {
    graphlab()
        .args(["--verbose", "--log-json", "sample"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}
