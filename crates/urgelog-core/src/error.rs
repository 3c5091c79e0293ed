//! Error types for core operations.
//!
//! Validation failures keep their own type ([`ValidationError`]) so the
//! CLI can prompt for corrected input instead of treating them like
//! storage faults; everything else funnels into [`UrgeLogError`].

use thiserror::Error;
use uuid::Uuid;

use crate::model::ValidationError;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, UrgeLogError>;

/// Core error type.
#[derive(Debug, Error)]
pub enum UrgeLogError {
    /// A candidate entry failed its invariant checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// No entry with the given id exists
    #[error("Entry not found: {0}")]
    NotFound(Uuid),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<rusqlite::Error> for UrgeLogError {
    fn from(err: rusqlite::Error) -> Self {
        UrgeLogError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for UrgeLogError {
    fn from(err: serde_json::Error) -> Self {
        UrgeLogError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for UrgeLogError {
    fn from(err: std::io::Error) -> Self {
        UrgeLogError::Storage(err.to_string())
    }
}
