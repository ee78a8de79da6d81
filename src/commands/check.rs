//! `stepgraph check` - validate a request without running it

use std::sync::Arc;

use crate::cli::RequestArgs;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::output_by_format;
use stepgraph_core::error::Result;
use stepgraph_core::format::quote;
use stepgraph_core::graph::GraphModel;

pub struct CheckCommand<'a> {
    pub args: &'a RequestArgs,
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let request = ctx.load_request(self.args)?;
        let opts = ctx.validate_options(self.args);
        let graph = Arc::new(GraphModel::validate_with(&request.graph, &opts)?);
        let nodes: Vec<&str> = graph.nodes().map(String::as_str).collect();

        // Binding the stepper is what rejects an unknown start node
        request.algorithm.stepper(Arc::clone(&graph), &request.start)?;

        output_by_format!(ctx.format,
            json => {
                let output = serde_json::json!({
                    "valid": true,
                    "algorithm": request.algorithm,
                    "start": request.start,
                    "strict": opts.strict,
                    "node_count": graph.len(),
                    "edge_count": graph.edge_count(),
                    "nodes": nodes,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            },
            human => {
                println!(
                    "ok: {} nodes, {} edges; start {}; algorithm {}",
                    graph.len(),
                    graph.edge_count(),
                    request.start,
                    request.algorithm
                );
                if !ctx.quiet() {
                    println!("nodes: {}", nodes.join(", "));
                }
            },
            records => {
                println!(
                    "C valid=true algo={} start={} strict={} nodes={} edges={}",
                    request.algorithm,
                    quote(&request.start),
                    opts.strict,
                    graph.len(),
                    graph.edge_count()
                );
            }
        );
        Ok(())
    }
}
