use crate::cli::support::{stepgraph, write_request, SCENARIO};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Structured logging on stderr
// ============================================================================

#[test]
fn test_default_run_logs_nothing() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["run", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_steps_to_stderr() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["--verbose", "--format", "records", "run", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("R algo=dijkstra"))
        .stdout(predicate::str::contains("advance").not())
        .stderr(predicate::str::contains("advance"))
        .stderr(predicate::str::contains("graph_validated"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    let output = stepgraph()
        .args(["--log-level", "debug", "--log-json", "run", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.is_empty());
    for line in stderr.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("level").is_some());
    }
}

#[test]
fn test_log_env_var_overrides_flags() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .env("STEPGRAPH_LOG", "stepgraph_core=trace")
        .args(["run", "--algo", "bfs", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("lazy_step"))
        .stderr(predicate::str::contains("advance"));
}
