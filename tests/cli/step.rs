use crate::cli::support::{stderr_json, stepgraph, write_request, SCENARIO};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Interactive stepping
// ============================================================================

#[test]
fn test_step_advances_once_per_line() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["step", "--algo", "bfs", "--input"])
        .arg(&input)
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Visited A"))
        .stdout(predicate::str::contains("[2] Visited B; discovered C, D"))
        .stdout(predicate::str::contains("[3]").not());
}

#[test]
fn test_step_stops_at_completion() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["--format", "records", "step", "--algo", "dfs", "--input"])
        .arg(&input)
        .write_stdin("\n".repeat(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("S step=5 algo=dfs current=-"))
        .stdout(predicate::str::contains("S step=6").not());
}

#[test]
fn test_step_quit_command() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["step", "--input"])
        .arg(&input)
        .write_stdin("\nq\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Finalized A at distance 0"))
        .stdout(predicate::str::contains("Stopped after 1 steps"))
        .stdout(predicate::str::contains("[2]").not());
}

#[test]
fn test_step_json_lines() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    let output = stepgraph()
        .args(["--format", "json", "step", "--input"])
        .arg(&input)
        .write_stdin("next\nnext\nnext\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["current"], "A");
    assert_eq!(lines[1]["current"], "B");
    assert_eq!(lines[2]["current"], "C");
    assert_eq!(lines[2]["step"], 3);
    assert_eq!(lines[2]["algorithm"], "dijkstra");
}

#[test]
fn test_step_requires_input_file() {
    let output = stepgraph()
        .args(["--format", "json", "step"])
        .write_stdin(SCENARIO)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "usage_error");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("--input"));
}
