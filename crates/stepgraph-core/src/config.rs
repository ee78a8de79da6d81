//! Configuration for stepgraph
//!
//! Read from `--config <path>`, else `$STEPGRAPH_CONFIG_DIR/config.toml`,
//! else `<platform config dir>/stepgraph/config.toml`. A missing file means
//! defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StepgraphError};
use crate::graph::ValidateOptions;

pub use types::{Config, OutputConfig};

const CONFIG_DIR: &str = "stepgraph";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "STEPGRAPH_CONFIG_DIR";

impl Config {
    /// Default config file location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| StepgraphError::io_operation("read config", path.display(), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            StepgraphError::io_operation("parse config", path.display(), e)
        })?;

        tracing::debug!(path = %path.display(), ?config, "config_loaded");
        Ok(config)
    }

    /// Validation options; strict mode is on if either the caller or the
    /// config file asks for it.
    pub fn validate_options(&self, strict: bool) -> ValidateOptions {
        ValidateOptions {
            strict: strict || self.strict,
        }
    }
}
