//! Observability for stringdb
//!
//! Structured logging only: synchronous JSON lines with deterministic key
//! ordering. Logging is read-only and has no effect on request handling.

mod logger;

pub use logger::{Logger, Severity};
