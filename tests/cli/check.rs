use crate::cli::support::{stderr_json, stdout_json, stepgraph, write_request, SCENARIO};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

// ============================================================================
// Request validation
// ============================================================================

#[test]
fn test_check_summarizes_graph() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["check", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ok: 4 nodes, 4 edges; start A; algorithm dijkstra",
        ))
        .stdout(predicate::str::contains("nodes: A, B, C, D"));
}

#[test]
fn test_check_json_lists_neighbor_only_nodes() {
    let dir = tempdir().unwrap();
    let input = write_request(
        dir.path(),
        "graph.json",
        r#"{"graph": {"A": {"B": 1, "C": 1}}, "start": "C", "algo": "dfs"}"#,
    );

    let output = stepgraph()
        .args(["--format", "json", "check", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["valid"], true);
    assert_eq!(json["algorithm"], "dfs");
    assert_eq!(json["node_count"], 3);
    assert_eq!(json["edge_count"], 2);
    assert_eq!(json["nodes"], json!(["A", "B", "C"]));
    assert_eq!(json["strict"], false);
}

#[test]
fn test_check_records() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["--format", "records", "check", "--algo", "bfs", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"C valid=true algo=bfs start="A" strict=false nodes=4 edges=4"#,
        ));
}

#[test]
fn test_check_unknown_start() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["check", "--start", "Z", "--input"])
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "error: start node 'Z' not present in graph",
        ));
}

#[test]
fn test_check_strict_rejects_undeclared_neighbor() {
    let dir = tempdir().unwrap();
    let input = write_request(
        dir.path(),
        "graph.json",
        r#"{"graph": {"A": {"B": 1}}, "start": "A"}"#,
    );

    let output = stepgraph()
        .args(["--format", "json", "check", "--strict", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "undeclared_neighbor");
    assert_eq!(json["error"]["field"], "graph.A.B");
}

#[test]
fn test_check_lenient_accepts_neighbor_only_nodes() {
    let dir = tempdir().unwrap();
    let input = write_request(
        dir.path(),
        "graph.json",
        r#"{"graph": {"A": {"B": 1}}, "start": "B"}"#,
    );

    stepgraph()
        .args(["check", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 2 nodes, 1 edges; start B"));
}
