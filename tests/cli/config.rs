use crate::support::{crossing, write_config, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_in_working_directory_sets_wait() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 3.0)]);
    write_config(dir.path(), "[wait]\nkind = \"constant\"\nvalue = 5.0\n");

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&graph)
        .assert()
        .success()
        .stdout("8.0\n0 1\n");
}

#[test]
fn test_wait_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 3.0)]);
    write_config(dir.path(), "[wait]\nkind = \"constant\"\nvalue = 5.0\n");

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&graph)
        .args(["--wait", "0"])
        .assert()
        .success()
        .stdout("3.0\n0 1\n");
}

#[test]
fn test_explicit_config_path_and_env() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 3.0)]);
    let config = dir.path().join("fast.toml");
    std::fs::write(&config, "[wait]\nkind = \"constant\"\nvalue = 1.0\n").unwrap();

    crossing()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("route")
        .arg(&graph)
        .assert()
        .success()
        .stdout("4.0\n0 1\n");

    crossing()
        .current_dir(dir.path())
        .env("CROSSING_CONFIG", &config)
        .arg("route")
        .arg(&graph)
        .assert()
        .success()
        .stdout("4.0\n0 1\n");
}

#[test]
fn test_config_query_defaults_and_precision() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "g.toml",
        4,
        &[(0, 1, 1.0), (1, 2, 1.0 / 3.0), (2, 3, 1.0)],
    );
    write_config(
        dir.path(),
        "[query]\nsource = 1\ntarget = 2\n\n[output]\nprecision = 2\n",
    );

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&graph)
        .assert()
        .success()
        .stdout("0.33\n1 2\n");
}

#[test]
fn test_signal_policy_from_config() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 3, &[(0, 1, 5.0), (1, 2, 1.0)]);
    write_config(
        dir.path(),
        "[wait]\nkind = \"signal\"\ncycle = 10.0\ngreen = 4.0\n",
    );

    // red on arrival at 5.0, leaves at 10.0, green on arrival at 11.0
    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&graph)
        .assert()
        .success()
        .stdout("11.0\n0 1 2\n");
}

#[test]
fn test_invalid_config_value_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 3.0)]);
    write_config(dir.path(), "[wait]\nkind = \"constant\"\nvalue = -5.0\n");

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid constant wait"));
}

#[test]
fn test_malformed_config_is_failure() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", 2, &[(0, 1, 3.0)]);
    write_config(dir.path(), "[wait]\nkind = \"teleport\"\n");

    crossing()
        .current_dir(dir.path())
        .arg("route")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
