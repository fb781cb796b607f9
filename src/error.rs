//! Error types for sortsweep.
//!
//! Every subprocess, parse, and IO failure surfaces as a typed error with
//! its own exit code; nothing is silently zeroed or ignored.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Neither sort-selection macro line present in the harness source
    #[error("No sort-selection macro line found in {0}")]
    ToggleNotFound(PathBuf),

    /// Build tool exited nonzero
    #[error("Build failed (exit {status}):\n{stderr}")]
    BuildFailed { status: i32, stderr: String },

    /// perf stat exited nonzero
    #[error("perf stat failed (exit {status}):\n{stderr}")]
    PerfFailed { status: i32, stderr: String },

    /// Named hardware counter absent from perf output
    #[error("Counter `{0}` not found in perf output")]
    CounterMissing(&'static str),

    /// Bad node-count range
    #[error("Invalid size range: {0}")]
    InvalidRange(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Results file (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidRange(_) => ExitCode::from(2),
            Self::FileNotFound(_) => ExitCode::from(3),
            Self::ToggleNotFound(_) => ExitCode::from(4),
            Self::BuildFailed { .. } => ExitCode::from(5),
            Self::PerfFailed { .. } => ExitCode::from(6),
            Self::CounterMissing(_) => ExitCode::from(7),
            Self::Io(_) => ExitCode::from(8),
            Self::Json(_) => ExitCode::from(9),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_missing_display() {
        let e = CliError::CounterMissing("cycles");
        assert_eq!(e.to_string(), "Counter `cycles` not found in perf output");
    }

    #[test]
    fn test_build_failed_carries_stderr() {
        let e = CliError::BuildFailed {
            status: 2,
            stderr: "queue.c:42: error".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("exit 2"));
        assert!(msg.contains("queue.c:42"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = CliError::from(io);
        assert!(matches!(e, CliError::Io(_)));
    }
}
