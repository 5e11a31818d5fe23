//! Error types for Solace core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.
//!
//! Cryptographic decode failures are deliberately absent: the cipher
//! layer collapses them into empty results so that a wrong PIN and
//! corrupted data are indistinguishable (see `crypto`).

use thiserror::Error;

/// Result type alias for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Invalid user input (empty PIN, malformed field values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Current PIN did not match during rotation
    #[error("Unauthorized: current PIN does not match")]
    Unauthorized,

    /// Operation requires an unlocked session
    #[error("Journal is locked")]
    Locked,

    /// Restore input failed structural validation
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Storage(err.to_string())
    }
}
