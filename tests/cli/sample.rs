use crate::cli::support::{graphlab, stdout_json};
use predicates::prelude::*;

#[test]
fn test_sample_list() {
    graphlab()
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("cities"))
        .stdout(predicate::str::contains("negative"));
}

#[test]
fn test_sample_print_json() {
    let output = graphlab().args(["sample", "cities"]).output().unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["nodes"].as_array().unwrap().len(), 10);
    assert_eq!(value["isOriented"], false);
}

#[test]
fn test_sample_output_feeds_back_into_commands() {
    let output = graphlab().args(["sample", "negative"]).output().unwrap();
    graphlab()
        .args(["--format", "json", "bellman-ford", "-", "-s", "s1", "-t", "s4"])
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalCost\": 9.0"));
}

#[test]
fn test_unknown_sample_exit_code_3() {
    graphlab()
        .args(["--format", "json", "sample", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"unknown_sample\""));
}
