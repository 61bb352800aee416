//! Error types and exit codes for graphlab
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm)
//! - 3: Data error (malformed graph, unknown sample)
//!
//! Expected algorithm outcomes (unknown start node, unreachable target,
//! negative cycle, disconnected graph) are never errors. They are carried
//! as data in the result types.

mod macros;

use thiserror::Error;

/// Exit codes for the graphlab binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading graphs or running algorithms
#[derive(Error, Debug)]
pub enum GraphLabError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, dijkstra, bellman-ford, floyd-warshall, kruskal, prim)")]
    UnknownAlgorithm(String),

    #[error("{algorithm} requires a {argument} node")]
    MissingArgument { algorithm: String, argument: String },

    // Data errors (exit code 3)
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("unknown sample graph: {0}")]
    UnknownSample(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphLabError {
    /// Create an error for a structurally invalid graph
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        GraphLabError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Create an error for a request missing a start or target node
    pub fn missing_argument(algorithm: impl std::fmt::Display, argument: &str) -> Self {
        GraphLabError::MissingArgument {
            algorithm: algorithm.to_string(),
            argument: argument.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphLabError::UnknownFormat(_)
            | GraphLabError::UsageError(_)
            | GraphLabError::UnknownAlgorithm(_)
            | GraphLabError::MissingArgument { .. } => ExitCode::Usage,

            GraphLabError::InvalidGraph { .. } | GraphLabError::UnknownSample(_) => {
                ExitCode::Data
            }

            GraphLabError::Io(_)
            | GraphLabError::Json(_)
            | GraphLabError::Yaml(_)
            | GraphLabError::Toml(_)
            | GraphLabError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphLabError::UnknownFormat(_) => "unknown_format",
            GraphLabError::UsageError(_) => "usage_error",
            GraphLabError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphLabError::MissingArgument { .. } => "missing_argument",
            GraphLabError::InvalidGraph { .. } => "invalid_graph",
            GraphLabError::UnknownSample(_) => "unknown_sample",
            GraphLabError::Io(_) => "io_error",
            GraphLabError::Json(_) => "json_error",
            GraphLabError::Yaml(_) => "yaml_error",
            GraphLabError::Toml(_) => "toml_error",
            GraphLabError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphlab operations
pub type Result<T> = std::result::Result<T, GraphLabError>;
