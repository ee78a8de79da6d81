//! Snapshot rendering shared by `trace` and `step`

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use crate::output_by_format;
use stepgraph_core::error::Result;
use stepgraph_core::format;
use stepgraph_core::graph::{explain, Algorithm, Snapshot};

/// Line announcing a traversal before its snapshots
pub fn print_header(ctx: &CommandContext, algorithm: Algorithm, start: &str) {
    match ctx.format {
        OutputFormat::Human if !ctx.quiet() => {
            println!("{} from {}", algorithm, start);
        }
        OutputFormat::Records => {
            println!("{}", format::traversal_header(algorithm, start));
        }
        _ => {}
    }
}

/// Snapshot as a JSON object carrying its 1-based step number
pub fn snapshot_json(step: usize, snapshot: &Snapshot) -> Result<Value> {
    let mut value = serde_json::to_value(snapshot)?;
    if let Value::Object(fields) = &mut value {
        fields.insert("step".to_string(), Value::from(step));
    }
    Ok(value)
}

/// Print one snapshot; JSON output is one compact object per line.
pub fn print_snapshot(ctx: &CommandContext, step: usize, snapshot: &Snapshot) -> Result<()> {
    output_by_format!(ctx.format,
        json => {
            println!("{}", serde_json::to_string(&snapshot_json(step, snapshot)?)?);
        },
        human => {
            for line in human_lines(step, snapshot, ctx.quiet()) {
                println!("{}", line);
            }
        },
        records => {
            println!("{}", format::snapshot_record(step, snapshot));
        }
    );
    Ok(())
}

pub fn human_lines(step: usize, snapshot: &Snapshot, quiet: bool) -> Vec<String> {
    let mut lines = vec![format!("[{}] {}", step, explain(snapshot))];
    if quiet {
        return lines;
    }

    let visited: Vec<&str> = snapshot.visited().iter().map(String::as_str).collect();
    lines.push(format!("    visited:  {}", visited.join(", ")));
    lines.push(format!("    frontier: {}", snapshot.frontier().join(", ")));

    if let Some(d) = snapshot.as_dijkstra() {
        let distances: Vec<String> = d
            .distances
            .iter()
            .map(|(node, dist)| format!("{}={}", node, dist))
            .collect();
        lines.push(format!("    distances: {}", distances.join(", ")));
    }

    lines
}
