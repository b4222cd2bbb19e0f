//! Error types for GeneSearch
//!
//! Provides a unified error type for all operations.
//!
//! Query outcomes such as "not found" or "missing" are NOT errors: they are
//! carried inside [`crate::protocol::Response`] and rendered into the report.

use thiserror::Error;

/// Result type alias using GeneError
pub type Result<T> = std::result::Result<T, GeneError>;

/// Unified error type for GeneSearch operations
#[derive(Debug, Error)]
pub enum GeneError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Malformed record on line {line}: expected 3 tab-separated fields, got {fields}")]
    MalformedRecord { line: usize, fields: usize },

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    #[error("Cannot decode '{formula}': digit at position {position} has no following character")]
    Decode { formula: String, position: usize },

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("Command '{command}' on line {line} needs {expected} argument(s)")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: usize,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeneError {
    /// Whether this error belongs to a single script command
    ///
    /// Command errors may be skipped under [`crate::config::ErrorPolicy::Skip`];
    /// everything else always aborts the run.
    pub fn is_command_error(&self) -> bool {
        matches!(
            self,
            GeneError::Decode { .. } | GeneError::MissingArgument { .. }
        )
    }
}
