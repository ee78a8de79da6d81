//! CLI argument parsing for stepgraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::RequestArgs;
use parse::parse_format;
pub use stepgraph_core::format::OutputFormat;

/// Stepgraph - stepwise BFS, DFS and Dijkstra traversal
#[derive(Parser, Debug)]
#[command(name = "stepgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, records [default: human, or `output.format` from config]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `stepgraph_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file path
    #[arg(long, global = true, env = "STEPGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a traversal to completion and print the final outcome
    Run(RequestArgs),

    /// Print every snapshot of a traversal in order
    Trace(RequestArgs),

    /// Advance one snapshot per line read from stdin (`q` quits)
    Step(RequestArgs),

    /// Validate a request and summarize its graph
    Check(RequestArgs),
}
