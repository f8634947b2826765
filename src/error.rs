//! Custom error types for spendtrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendtrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// User-supplied input (amount, date) fails to parse
    #[error("Invalid input: {0}")]
    Format(String),

    /// Store file exists but cannot be parsed as expense data
    #[error("Corrupt data in {path}: {detail}")]
    CorruptData { path: String, detail: String },

    /// A required file is missing
    #[error("{what} not found: {path}")]
    NotFound { what: &'static str, path: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create a "not found" error for the store file
    pub fn store_not_found(path: impl Into<String>) -> Self {
        Self::NotFound {
            what: "Expense file",
            path: path.into(),
        }
    }

    /// Create a "not found" error for the backup file
    pub fn backup_not_found(path: impl Into<String>) -> Self {
        Self::NotFound {
            what: "Backup",
            path: path.into(),
        }
    }

    /// Create a corrupt-data error for a store file that failed to parse
    pub fn corrupt(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is a corrupt-data error
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for spendtrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;
