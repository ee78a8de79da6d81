//! `stepgraph run` - drain a traversal and print its final outcome
//!
//! BFS/DFS report the visited set; Dijkstra adds distances, predecessors
//! and the shortest path to each reached node.

use crate::cli::RequestArgs;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::output_by_format;
use stepgraph_core::error::Result;
use stepgraph_core::format;
use stepgraph_core::request::RunOutcome;

pub struct RunCommand<'a> {
    pub args: &'a RequestArgs,
}

impl Command for RunCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let request = ctx.load_request(self.args)?;
        let outcome = request.run(&ctx.validate_options(self.args))?;

        tracing::debug!(
            algorithm = %outcome.algorithm,
            steps = outcome.steps,
            visited = outcome.visited.len(),
            elapsed = ?ctx.start.elapsed(),
            "run"
        );

        output_by_format!(ctx.format,
            json => {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            },
            human => {
                for line in human_lines(&outcome, ctx.quiet()) {
                    println!("{}", line);
                }
            },
            records => {
                for line in format::outcome_records(&outcome) {
                    println!("{}", line);
                }
            }
        );
        Ok(())
    }
}

pub fn human_lines(outcome: &RunOutcome, quiet: bool) -> Vec<String> {
    let visited: Vec<&str> = outcome.visited.iter().map(String::as_str).collect();
    let mut lines = Vec::new();

    if !quiet {
        lines.push(format!(
            "{} from {} ({} steps)",
            outcome.algorithm, outcome.start, outcome.steps
        ));
    }
    lines.push(format!("visited: {}", visited.join(", ")));

    if let Some(distances) = &outcome.distances {
        for (node, distance) in distances {
            let path = outcome
                .paths
                .as_ref()
                .and_then(|paths| paths.get(node))
                .map_or_else(|| "unreachable".to_string(), |p| p.join(" -> "));
            lines.push(format!("  {}  {}  {}", node, distance, path));
        }
    }

    lines
}
