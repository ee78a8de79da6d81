//! Command trait and context for dispatching commands

use std::io::Read;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat, RequestArgs};
use stepgraph_core::config::Config;
use stepgraph_core::error::Result;
use stepgraph_core::graph::ValidateOptions;
use stepgraph_core::request::{InputFormat, RequestOverrides, RunRequest};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    /// Effective output format: `--format`, else config, else human
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Validation options from `--strict` and config
    pub fn validate_options(&self, args: &RequestArgs) -> ValidateOptions {
        self.config.validate_options(args.strict)
    }

    /// Read the request named by `args`, applying `--start`/`--algo` on top
    /// of the document before its fields are checked.
    pub fn load_request(&self, args: &RequestArgs) -> Result<RunRequest> {
        let overrides = RequestOverrides {
            start: args.start.clone(),
            algorithm: args.algo,
        };
        let format = args.yaml.then_some(InputFormat::Yaml);
        let default_algorithm = self.config.default_algorithm;

        let request = match args.input_path() {
            Some(path) => RunRequest::load(path, format, default_algorithm, &overrides)?,
            None => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)?;
                RunRequest::parse(
                    &content,
                    format.unwrap_or_default(),
                    default_algorithm,
                    &overrides,
                )?
            }
        };
        tracing::debug!(
            algorithm = %request.algorithm,
            start = %request.start,
            elapsed = ?self.start.elapsed(),
            "load_request"
        );
        Ok(request)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("stepgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step through BFS, DFS and Dijkstra traversals one node at a time.");
        println!();
        println!("Run `stepgraph --help` for usage information.");
        Ok(())
    }
}
