use crate::support::{crossing, stderr_json, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_source_out_of_range_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 1.0)]);

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&graph)
        .args(["--source", "5"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr("error: source node 5 out of range (graph has 2 nodes)\n");
}

#[test]
fn test_target_out_of_range_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 1.0)]);

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&graph)
        .args(["--target", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("target node 2 out of range"));
}

#[test]
fn test_negative_wait_flag_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 1.0)]);

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&graph)
        .args(["--wait", "-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid constant wait"));
}

#[test]
fn test_malformed_graphs_are_data_errors() {
    let dir = tempdir().unwrap();
    let empty = write_graph(dir.path(), "empty.toml", 0, &[]);
    let dangling = write_graph(dir.path(), "dangling.toml", 2, &[(0, 2, 1.0)]);
    let negative = write_graph(dir.path(), "negative.toml", 2, &[(0, 1, -1.0)]);

    crossing()
        .current_dir(dir.path())
        .arg("check")
        .arg(&empty)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph size: 0"));

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&dangling)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node 2 out of range"));

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&negative)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid weight -1"));
}

#[test]
fn test_infinite_weight_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, f64::INFINITY)]);

    crossing()
        .current_dir(dir.path())
        .arg("check")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid weight inf"));
}

#[test]
fn test_missing_graph_file_is_failure() {
    let dir = tempdir().unwrap();

    crossing()
        .current_dir(dir.path())
        .args(["check", "absent.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: IO error"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();

    crossing()
        .current_dir(dir.path())
        .args(["--quiet", "check", "absent.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, -4.0)]);

    let output = crossing()
        .current_dir(dir.path())
        .args(["--format", "json", "route"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "invalid_weight");
}

#[test]
fn test_json_envelope_for_argument_errors() {
    let output = crossing()
        .args(["--format", "json", "route"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "usage_error");
}
