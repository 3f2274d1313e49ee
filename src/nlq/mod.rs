//! Natural-language query translation
//!
//! Converts free-text queries into the same structured filter set the
//! direct query-parameter endpoint uses. Fixed ordered pattern matching
//! only; there is no real natural-language understanding here.

mod errors;
mod interpreter;
mod rules;

pub use errors::{NlqError, NlqResult};
pub use interpreter::{InterpretedQuery, QueryInterpreter};
