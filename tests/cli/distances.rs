use crate::support::{crossing, stdout_json, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_distances_lists_every_node() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 3, &[(0, 1, 1.5)]);

    crossing()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .assert()
        .success()
        .stdout("0 0.0 -\n1 1.5 0\n2 inf -\n")
        .stderr(predicate::str::contains("1 of 3 nodes unreachable"));
}

#[test]
fn test_distances_quiet_skips_summary() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 3, &[(0, 1, 1.5)]);

    crossing()
        .current_dir(dir.path())
        .args(["--quiet", "distances"])
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_distances_with_wait_and_source() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "g.toml",
        3,
        &[(0, 1, 1.0), (1, 2, 2.0), (2, 0, 4.0)],
    );

    crossing()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&graph)
        .args(["--source", "1", "--wait", "0.5"])
        .assert()
        .success()
        .stdout("0 7.0 2\n1 0.0 -\n2 2.5 1\n");
}

#[test]
fn test_distances_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 3, &[(0, 1, 1.5)]);

    let output = crossing()
        .current_dir(dir.path())
        .args(["--format", "json", "distances"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], 0);
    assert_eq!(json["nodes"][1]["distance"], 1.5);
    assert_eq!(json["nodes"][1]["predecessor"], 0);
    assert_eq!(json["nodes"][2]["reachable"], false);
    assert_eq!(json["stats"]["stopped_at_target"], false);
}
