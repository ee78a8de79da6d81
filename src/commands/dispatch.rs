//! Command dispatch logic for stepgraph

pub mod command;

use std::time::Instant;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands::{check, run, step, trace};
use command::{Command, CommandContext, NoCommand};
use stepgraph_core::config::Config;
use stepgraph_core::error::Result;

pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);

    let command: Box<dyn Command + '_> = match &cli.command {
        None => Box::new(NoCommand),
        Some(Commands::Run(args)) => Box::new(run::RunCommand { args }),
        Some(Commands::Trace(args)) => Box::new(trace::TraceCommand { args }),
        Some(Commands::Step(args)) => Box::new(step::StepCommand { args }),
        Some(Commands::Check(args)) => Box::new(check::CheckCommand { args }),
    };

    let result = command.execute(&ctx);
    tracing::debug!(elapsed = ?start.elapsed(), ok = result.is_ok(), "dispatch");
    result
}
