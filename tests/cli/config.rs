use crate::cli::support::{stepgraph, write_request, SCENARIO};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config file handling
// ============================================================================

const NO_ALGO: &str = r#"{"graph": {"A": {"B": 1}, "B": {}}, "start": "A"}"#;

#[test]
fn test_config_sets_default_algorithm_and_format() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", NO_ALGO);
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "default_algorithm = \"bfs\"\n\n[output]\nformat = \"records\"\n",
    )
    .unwrap();

    stepgraph()
        .arg("--config")
        .arg(&config)
        .args(["run", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"R algo=bfs start="A" steps=3"#));
}

#[test]
fn test_request_algorithm_beats_config_default() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);
    let config = dir.path().join("config.toml");
    fs::write(&config, "default_algorithm = \"bfs\"\n").unwrap();

    let with_algo = write_request(
        dir.path(),
        "dfs.json",
        r#"{"graph": {"A": {}}, "start": "A", "algo": "dfs"}"#,
    );

    stepgraph()
        .args(["--format", "records", "--config"])
        .arg(&config)
        .args(["run", "--input"])
        .arg(&with_algo)
        .assert()
        .success()
        .stdout(predicate::str::contains("R algo=dfs"));

    stepgraph()
        .args(["--format", "records", "--config"])
        .arg(&config)
        .args(["run", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("R algo=bfs"));
}

#[test]
fn test_format_flag_beats_config() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", NO_ALGO);
    let config = dir.path().join("config.toml");
    fs::write(&config, "[output]\nformat = \"records\"\n").unwrap();

    stepgraph()
        .args(["--format", "human", "--config"])
        .arg(&config)
        .args(["run", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra from A"));
}

#[test]
fn test_config_strict_mode() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", r#"{"graph": {"A": {"B": 1}}, "start": "A"}"#);
    let config = dir.path().join("config.toml");
    fs::write(&config, "strict = true\n").unwrap();

    stepgraph()
        .arg("--config")
        .arg(&config)
        .args(["run", "--input"])
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("undeclared node 'B'"));
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", NO_ALGO);
    fs::write(dir.path().join("config.toml"), "default_algorithm = \"dfs\"\n").unwrap();

    stepgraph()
        .env("STEPGRAPH_CONFIG_DIR", dir.path())
        .args(["--format", "records", "run", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("R algo=dfs"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "default_algorithm = \"astar\"\n").unwrap();

    stepgraph()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn test_missing_explicit_config_is_reported() {
    let dir = tempdir().unwrap();

    stepgraph()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}
