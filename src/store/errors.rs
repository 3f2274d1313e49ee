//! Record store errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this content hash already exists
    #[error("duplicate record: {0}")]
    Duplicate(String),

    /// No record with this content hash
    #[error("record not found: {0}")]
    NotFound(String),

    /// Data file could not be read or written
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record map could not be encoded
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Data file exists but does not parse
    #[error("corrupt data file {path}: {reason}")]
    Corrupt { path: String, reason: String },

    /// A writer panicked while holding the lock
    #[error("store lock poisoned")]
    LockPoisoned,
}
