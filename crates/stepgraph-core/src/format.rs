//! Output format handling for stepgraph
//!
//! - human: readable, one step per block
//! - json: stable, machine-readable JSON
//! - records: line-oriented `key=value` records, one line per snapshot

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StepgraphError;
use crate::graph::{Algorithm, Snapshot};
use crate::request::RunOutcome;

/// Output format for stepgraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = StepgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(StepgraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Marker for an absent node; real identifiers are always quoted.
const ABSENT: &str = "-";

/// Quote a node identifier for a records line so separators inside it stay
/// unambiguous
pub fn quote(id: &str) -> String {
    format!("\"{}\"", escape_quotes(id))
}

fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

fn join<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items
        .into_iter()
        .map(|id| quote(id))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render one snapshot as a records line.
///
/// Node identifiers are double-quoted with `\` and `"` escaped. `S` lines
/// carry the common fields; Dijkstra appends `dist=` and `pred=` lists of
/// `"node":value` pairs. Unreached distances print as `inf` and a completed
/// snapshot prints `current=-`.
pub fn snapshot_record(step: usize, snapshot: &Snapshot) -> String {
    let mut line = format!(
        "S step={} algo={} current={} visited={} frontier={} neighbors={}",
        step,
        snapshot.algorithm(),
        snapshot.current().map_or_else(|| ABSENT.to_string(), quote),
        join(snapshot.visited()),
        join(snapshot.frontier()),
        join(snapshot.neighbors()),
    );

    if let Some(d) = snapshot.as_dijkstra() {
        let dist: Vec<String> = d
            .distances
            .iter()
            .map(|(n, v)| format!("{}:{}", quote(n), v))
            .collect();
        let pred: Vec<String> = d
            .predecessor
            .iter()
            .map(|(n, p)| format!("{}:{}", quote(n), quote(p)))
            .collect();
        line.push_str(&format!(" dist={} pred={}", dist.join(","), pred.join(",")));
    }

    line
}

/// Render a one-shot outcome as records lines
pub fn outcome_records(outcome: &RunOutcome) -> Vec<String> {
    let mut lines = vec![format!(
        "R algo={} start={} steps={} visited={}",
        outcome.algorithm,
        quote(&outcome.start),
        outcome.steps,
        join(&outcome.visited)
    )];

    if let Some(distances) = &outcome.distances {
        for (node, distance) in distances {
            let pred = outcome
                .predecessor
                .as_ref()
                .and_then(|p| p.get(node))
                .map_or_else(|| ABSENT.to_string(), |p| quote(p));
            let path = outcome
                .paths
                .as_ref()
                .and_then(|p| p.get(node))
                .map_or_else(
                    || ABSENT.to_string(),
                    |p| p.iter().map(|id| quote(id)).collect::<Vec<_>>().join(">"),
                );
            lines.push(format!(
                "D node={} dist={} pred={} path={}",
                quote(node),
                distance,
                pred,
                path
            ));
        }
    }

    lines
}

/// Header line emitted before streamed snapshots
pub fn traversal_header(algorithm: Algorithm, start: &str) -> String {
    format!("H algo={} start={}", algorithm, quote(start))
}
