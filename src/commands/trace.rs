//! `stepgraph trace` - print every snapshot of a traversal in order

use crate::cli::{OutputFormat, RequestArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::render;
use stepgraph_core::error::Result;

pub struct TraceCommand<'a> {
    pub args: &'a RequestArgs,
}

impl Command for TraceCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let request = ctx.load_request(self.args)?;
        let mut driver = request.driver(&ctx.validate_options(self.args))?;
        let snapshots = driver.drain_all()?;

        if ctx.format == OutputFormat::Json {
            let steps = snapshots
                .iter()
                .enumerate()
                .map(|(i, snapshot)| render::snapshot_json(i + 1, snapshot))
                .collect::<Result<Vec<_>>>()?;
            let output = serde_json::json!({
                "algorithm": request.algorithm,
                "start": request.start,
                "steps": steps,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        render::print_header(ctx, request.algorithm, &request.start);
        for (i, snapshot) in snapshots.iter().enumerate() {
            render::print_snapshot(ctx, i + 1, snapshot)?;
        }
        Ok(())
    }
}
