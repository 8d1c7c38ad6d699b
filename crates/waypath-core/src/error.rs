//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including "no path" and unknown start results)
//! - 2: Usage error (bad flags/args, malformed edges, negative weights)
//! - 3: Data/config error (missing or malformed config file)
//!
//! "No path" and "start vertex does not exist" are ordinary search results
//! and never appear here; only precondition violations and I/O do.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the waypath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/config error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("negative edge weight {weight} (weights must be >= 0)")]
    NegativeWeight { weight: i64 },

    #[error("invalid edge `{spec}`: {reason}")]
    InvalidEdgeSpec { spec: String, reason: String },

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data/config errors (exit code 3)
    #[error("config file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },
}

impl WaypathError {
    /// Create an error for a malformed edge argument
    pub fn invalid_edge(spec: &str, reason: impl std::fmt::Display) -> Self {
        WaypathError::InvalidEdgeSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        WaypathError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::NegativeWeight { .. }
            | WaypathError::InvalidEdgeSpec { .. }
            | WaypathError::UnknownFormat(_)
            | WaypathError::UsageError(_) => ExitCode::Usage,

            WaypathError::ConfigNotFound { .. } | WaypathError::Toml(_) => ExitCode::Data,

            WaypathError::Io(_) | WaypathError::Json(_) | WaypathError::FailedOperation { .. } => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WaypathError::NegativeWeight { .. } => "negative_weight",
            WaypathError::InvalidEdgeSpec { .. } => "invalid_edge",
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::ConfigNotFound { .. } => "config_not_found",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::FailedOperation { .. } => "failed_operation",
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

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_weight_is_usage_error() {
        let err = WaypathError::NegativeWeight { weight: -3 };
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(
            err.to_string(),
            "negative edge weight -3 (weights must be >= 0)"
        );
    }

    #[test]
    fn test_config_errors_are_data_errors() {
        let err = WaypathError::ConfigNotFound {
            path: PathBuf::from("missing.toml"),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn test_io_error_is_failure() {
        let err = WaypathError::from(std::io::Error::other("disk on fire"));
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(err.exit_code()), 1);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = WaypathError::invalid_edge("A:B:x", "weight is not an integer");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "invalid_edge");
        assert_eq!(
            json["error"]["message"],
            "invalid edge `A:B:x`: weight is not an integer"
        );
    }
}
