//! Error types and exit codes for stepgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, driver misuse)
//! - 2: Usage error (bad flags/args, unknown algorithm)
//! - 3: Data error (malformed graph, unknown start node)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed request or graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or driving a traversal
#[derive(Error, Debug)]
pub enum StepgraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm '{0}' (expected: bfs, dfs, or dijkstra)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid request field '{field}': {reason}")]
    InvalidRequest { field: String, reason: String },

    #[error("malformed graph at '{field}': {reason}")]
    MalformedGraph { field: String, reason: String },

    #[error("start node '{start}' not present in graph")]
    UnknownStart { start: String },

    #[error("graph contains edge {node} -> {neighbor} to undeclared node '{neighbor}'")]
    UndeclaredNeighbor { node: String, neighbor: String },

    // Generic failures (exit code 1)
    #[error("{algorithm} traversal already exhausted after {steps} steps")]
    DriverExhausted { algorithm: String, steps: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl StepgraphError {
    /// Create an error for an invalid request field
    pub fn invalid_request(field: &str, reason: impl std::fmt::Display) -> Self {
        StepgraphError::InvalidRequest {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a structurally malformed graph
    pub fn malformed_graph(field: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        StepgraphError::MalformedGraph {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        StepgraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            StepgraphError::UnknownFormat(_)
            | StepgraphError::UnknownAlgorithm(_)
            | StepgraphError::UsageError(_) => ExitCode::Usage,

            StepgraphError::InvalidRequest { .. }
            | StepgraphError::MalformedGraph { .. }
            | StepgraphError::UnknownStart { .. }
            | StepgraphError::UndeclaredNeighbor { .. } => ExitCode::Data,

            StepgraphError::DriverExhausted { .. }
            | StepgraphError::Io(_)
            | StepgraphError::Yaml(_)
            | StepgraphError::Json(_)
            | StepgraphError::FailedOperationWithTarget { .. }
            | StepgraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable error type identifier used in structured output
    pub fn error_type(&self) -> &'static str {
        match self {
            StepgraphError::UnknownFormat(_) => "unknown_format",
            StepgraphError::UnknownAlgorithm(_) => "unknown_algorithm",
            StepgraphError::UsageError(_) => "usage_error",
            StepgraphError::InvalidRequest { .. } => "invalid_request",
            StepgraphError::MalformedGraph { .. } => "malformed_graph",
            StepgraphError::UnknownStart { .. } => "unknown_start",
            StepgraphError::UndeclaredNeighbor { .. } => "undeclared_neighbor",
            StepgraphError::DriverExhausted { .. } => "driver_exhausted",
            StepgraphError::Io(_) => "io_error",
            StepgraphError::Yaml(_) => "yaml_error",
            StepgraphError::Json(_) => "json_error",
            StepgraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            StepgraphError::Other(_) => "other",
        }
    }

    /// The request/graph field an error points at, if any
    pub fn field(&self) -> Option<String> {
        match self {
            StepgraphError::InvalidRequest { field, .. }
            | StepgraphError::MalformedGraph { field, .. } => Some(field.clone()),
            StepgraphError::UnknownStart { .. } => Some("start".to_string()),
            StepgraphError::UndeclaredNeighbor { node, neighbor } => {
                Some(format!("graph.{}.{}", node, neighbor))
            }
            StepgraphError::UnknownAlgorithm(_) => Some("algo".to_string()),
            _ => None,
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let Some(field) = self.field() {
            error_obj["field"] = serde_json::json!(field);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for stepgraph operations
pub type Result<T> = std::result::Result<T, StepgraphError>;
