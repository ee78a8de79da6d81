use std::path::{Path, PathBuf};

use clap::Args;
use stepgraph_core::graph::Algorithm;

use super::parse::parse_algorithm;

/// Where a request comes from and how to override it
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Request file (JSON, or YAML by `.yaml`/`.yml` extension); `-` or omitted reads stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Read the request as YAML regardless of extension
    #[arg(long)]
    pub yaml: bool,

    /// Start node, overriding the request's `start`
    #[arg(long, short)]
    pub start: Option<String>,

    /// Algorithm (bfs, dfs, dijkstra), overriding the request's `algo`
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algo: Option<Algorithm>,

    /// Reject edges to nodes that are not declared as source keys
    #[arg(long)]
    pub strict: bool,
}

impl RequestArgs {
    /// The input file, or `None` when the request comes from stdin
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}
