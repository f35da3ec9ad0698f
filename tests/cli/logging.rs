use crate::support::{crossing, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_log_level_debug_reports_search_counters() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 1.0)]);

    crossing()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "route"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("1.0\n0 1\n")
        .stderr(predicate::str::contains("shortest_path_tree"))
        .stderr(predicate::str::contains("settled"));
}

#[test]
fn test_default_level_is_silent() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 1.0)]);

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 1.0)]);

    let output = crossing()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "--log-json", "route"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.lines().count() > 0);
    for line in stderr.lines() {
        serde_json::from_str::<serde_json::Value>(line).unwrap();
    }
}

#[test]
fn test_crossing_log_env_sets_filter() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 1.0)]);

    crossing()
        .current_dir(dir.path())
        .env("CROSSING_LOG", "crossing_core=debug")
        .arg("route")
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("shortest_path_tree"));
}
