//! Interpreter failure conditions
//!
//! Both conditions are recoverable and carry enough context for a caller
//! to produce a user-facing message.

use thiserror::Error;

/// Result type for query interpretation
pub type NlqResult<T> = Result<T, NlqError>;

/// Natural-language query errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NlqError {
    /// Both length bounds were derived and cannot hold simultaneously
    #[error("conflicting filters: min_length {min} is greater than max_length {max}")]
    ConflictingFilters { min: i64, max: i64 },

    /// No rule recognized anything in the query
    #[error("could not interpret query: {query:?}")]
    UnparseableQuery { query: String },
}
