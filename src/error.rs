//! Error types for Linkar
//!
//! Provides a unified error type for all client operations.
//!
//! Server-reported errors are not represented here: they travel inside the
//! response payload and are read with [`crate::protocol::extract_errors`].

use thiserror::Error;

/// Result type alias using LinkarError
pub type Result<T> = std::result::Result<T, LinkarError>;

/// Unified error type for Linkar operations
#[derive(Debug, Error)]
pub enum LinkarError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Record Model Errors
    // -------------------------------------------------------------------------
    #[error("Dictionary name not found: {0}")]
    DictionaryNotFound(String),

    #[error("Dictionaries List Empty")]
    DictionariesEmpty,

    #[error("Dictionary is read-only on a single item: {0}")]
    ReadOnlyDictionary(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Duplicate record id: {0}")]
    DuplicateRecordId(String),

    // -------------------------------------------------------------------------
    // Session Errors
    // -------------------------------------------------------------------------
    #[error("Not logged in: no active session")]
    NotLoggedIn,

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LinkarError {
    fn from(e: serde_json::Error) -> Self {
        LinkarError::Serialization(e.to_string())
    }
}
