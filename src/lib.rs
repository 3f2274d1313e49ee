//! stringdb - A small string analysis and retrieval service
//!
//! Stores strings keyed by their SHA-256 content hash, derives textual
//! properties, and answers filter queries over the stored analyses,
//! including a rule-based natural-language filter translator.

pub mod analysis;
pub mod cli;
pub mod filter;
pub mod http_server;
pub mod nlq;
pub mod observability;
pub mod store;
