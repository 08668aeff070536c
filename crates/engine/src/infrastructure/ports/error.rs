//! Error types for port operations.

use std::path::PathBuf;

/// Condition evaluation failures. Callers treat every variant as "not eligible".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    /// The evaluator is not installed or has not finished initializing.
    #[error("Condition evaluator unavailable")]
    Unavailable,

    /// The evaluator rejected the expression.
    #[error("Invalid condition {expression}: {message}")]
    Invalid { expression: String, message: String },
}

impl ConditionError {
    pub fn invalid(expression: impl ToString, message: impl ToString) -> Self {
        Self::Invalid {
            expression: expression.to_string(),
            message: message.to_string(),
        }
    }
}

/// Failures while reading a single content pack from disk.
///
/// Pack failures are load-time warnings: the pack is skipped, the session continues.
#[derive(Debug, thiserror::Error)]
pub enum PackLoadError {
    #[error("{} is missing", path.display())]
    MissingFile { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },
}

impl PackLoadError {
    /// Check if the pack simply lacks its stops file.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::MissingFile { .. })
    }
}
