//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::Algorithm;

/// User configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Algorithm used when a request does not name one
    #[serde(default)]
    pub default_algorithm: Algorithm,

    /// Reject edges to nodes that are not declared as source keys
    #[serde(default)]
    pub strict: bool,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}
