use crate::support::{crossing, stdout_json, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_check_reports_counts() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 3, &[(0, 1, 1.0), (1, 2, 1.0)]);

    crossing()
        .current_dir(dir.path())
        .arg("check")
        .arg(&graph)
        .assert()
        .success()
        .stdout("3 nodes, 2 edges\n");
}

#[test]
fn test_check_warns_on_announced_count_mismatch() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("g.toml");
    std::fs::write(
        &graph,
        "nodes = 2\nexpected_edges = 4\n\n[[edges]]\nsrc = 0\ndst = 1\nweight = 1.0\n",
    )
    .unwrap();

    crossing()
        .current_dir(dir.path())
        .arg("check")
        .arg(&graph)
        .assert()
        .success()
        .stdout("2 nodes, 1 edges\n")
        .stderr(predicate::str::contains("announces 4 edges"));
}

#[test]
fn test_check_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 5, &[(4, 0, 2.0)]);

    let output = crossing()
        .current_dir(dir.path())
        .args(["--format", "json", "check"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["nodes"], 5);
    assert_eq!(json["edges"], 1);
    assert_eq!(json["expected_edges"], 1);
    assert_eq!(json["edge_count_mismatch"], false);
}

#[test]
fn test_check_json_reports_announced_count_mismatch() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("g.toml");
    std::fs::write(
        &graph,
        "nodes = 2\nexpected_edges = 4\n\n[[edges]]\nsrc = 0\ndst = 1\nweight = 1.0\n",
    )
    .unwrap();

    let output = crossing()
        .current_dir(dir.path())
        .args(["--format", "json", "check"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["edges"], 1);
    assert_eq!(json["expected_edges"], 4);
    assert_eq!(json["edge_count_mismatch"], true);
}
