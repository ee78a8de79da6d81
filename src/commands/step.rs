//! `stepgraph step` - interactive stepping
//!
//! Each line read from stdin advances the traversal by one snapshot. `q` or
//! `quit` stops early; EOF stops quietly. The request must come from a file
//! since stdin carries the step commands.

use std::io::BufRead;

use crate::cli::{OutputFormat, RequestArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::render;
use stepgraph_core::bail_usage;
use stepgraph_core::error::Result;

pub struct StepCommand<'a> {
    pub args: &'a RequestArgs,
}

impl Command for StepCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if self.args.input_path().is_none() {
            bail_usage!("step reads commands from stdin; pass the request with --input <file>");
        }

        let request = ctx.load_request(self.args)?;
        let mut driver = request.driver(&ctx.validate_options(self.args))?;
        render::print_header(ctx, driver.algorithm(), driver.start());

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if matches!(line.trim(), "q" | "quit") {
                if ctx.format == OutputFormat::Human && !ctx.quiet() {
                    println!("Stopped after {} steps", driver.steps_taken());
                }
                break;
            }

            let snapshot = driver.advance()?;
            render::print_snapshot(ctx, driver.steps_taken(), &snapshot)?;
            if snapshot.is_complete() {
                break;
            }
        }

        tracing::debug!(steps = driver.steps_taken(), state = ?driver.state(), "step_session");
        Ok(())
    }
}
