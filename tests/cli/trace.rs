use crate::cli::support::{stdout_json, stepgraph, write_request, SCENARIO};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

// ============================================================================
// Full snapshot traces
// ============================================================================

#[test]
fn test_trace_dfs_order() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["--format", "records", "trace", "--algo", "dfs", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"H algo=dfs start="A""#))
        .stdout(predicate::str::contains(
            r#"S step=1 algo=dfs current="A" visited="A" frontier="B","C" neighbors="B","C""#,
        ))
        .stdout(predicate::str::contains(r#"S step=2 algo=dfs current="C""#))
        .stdout(predicate::str::contains(r#"S step=3 algo=dfs current="B""#))
        .stdout(predicate::str::contains(r#"S step=4 algo=dfs current="D""#))
        .stdout(predicate::str::contains(
            r#"S step=5 algo=dfs current=- visited="A","B","C","D" frontier= neighbors="#,
        ));
}

#[test]
fn test_trace_bfs_json() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    let output = stepgraph()
        .args(["--format", "json", "trace", "--algo", "bfs", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(steps.len(), 5);

    let order: Vec<&str> = steps
        .iter()
        .filter_map(|s| s["current"].as_str())
        .collect();
    assert_eq!(order, vec!["A", "B", "C", "D"]);

    assert_eq!(steps[0]["frontier"], json!(["B", "C"]));
    assert_eq!(steps[1]["frontier"], json!(["C", "C", "D"]));
    assert_eq!(steps[1]["neighbors"], json!(["C", "D"]));
    assert!(steps[4]["current"].is_null());
    assert_eq!(steps[4]["frontier"], json!([]));
    assert_eq!(steps[4]["step"], 5);
}

#[test]
fn test_trace_dijkstra_json_frontiers() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    let output = stepgraph()
        .args(["--format", "json", "trace", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    let json = stdout_json(&output);
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["frontier"], json!(["B", "C"]));
    assert_eq!(steps[1]["frontier"], json!(["C", "D"]));
    assert_eq!(steps[2]["frontier"], json!(["D", "C"]));
    assert_eq!(steps[3]["current"], "D");
    assert_eq!(steps[0]["distances"]["D"], serde_json::Value::Null);
    assert_eq!(steps[4]["distances"]["C"], 2.0);
    assert_eq!(steps[4]["predecessor"]["C"], "B");
}

#[test]
fn test_trace_human_narrates_each_step() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["trace", "--algo", "bfs", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs from A"))
        .stdout(predicate::str::contains(
            "[1] Visited A; discovered B, C; queue is now [B, C]",
        ))
        .stdout(predicate::str::contains("    frontier: B, C"))
        .stdout(predicate::str::contains(
            "[5] Traversal complete: visited 4 nodes",
        ));
}

#[test]
fn test_trace_quiet_prints_summaries_only() {
    let dir = tempdir().unwrap();
    let input = write_request(dir.path(), "graph.json", SCENARIO);

    stepgraph()
        .args(["--quiet", "trace", "--algo", "bfs", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Visited A"))
        .stdout(predicate::str::contains("visited:").not())
        .stdout(predicate::str::contains("bfs from A").not());
}
