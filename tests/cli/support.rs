use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// The four-node graph used across tests:
/// A -1-> B, A -4-> C, B -1-> C, B -1-> D
pub const SCENARIO: &str = r#"{
  "graph": {"A": {"B": 1, "C": 4}, "B": {"C": 1, "D": 1}, "C": {}, "D": {}},
  "start": "A"
}"#;

/// Get a Command for stepgraph, isolated from user config and log settings
pub fn stepgraph() -> Command {
    let mut cmd = cargo_bin_cmd!("stepgraph");
    cmd.env(
        "STEPGRAPH_CONFIG_DIR",
        Path::new(env!("CARGO_TARGET_TMPDIR")).join("stepgraph-no-config"),
    )
    .env_remove("STEPGRAPH_CONFIG")
    .env_remove("STEPGRAPH_LOG")
    .env_remove("RUST_LOG");
    cmd
}

/// Write a request document into `dir`
pub fn write_request(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as a single JSON document
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Parse stderr as a single JSON document
pub fn stderr_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).unwrap()
}
