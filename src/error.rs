//! Custom error types for the ledger
//!
//! Defines the error hierarchy for the application using thiserror for
//! ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for entry requests
    #[error("Validation error: {0}")]
    Validation(String),

    /// A name that does not match any account in the registry
    #[error("Unknown account: {0}")]
    InvalidAccount(String),

    /// Entry lookup failures
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Snapshot schema migration errors
    #[error("Migration error: {0}")]
    Migration(String),
}

impl LedgerError {
    /// Create an "entry not found" error from any identifier
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::EntryNotFound(identifier.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unknown-account error
    pub fn is_invalid_account(&self) -> bool {
        matches!(self, Self::InvalidAccount(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
