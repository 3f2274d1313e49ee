//! # HTTP Server Module
//!
//! Axum-based API for the string analysis service.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness check
//! - `POST /strings` - Analyze and store a string
//! - `GET /strings` - List with direct filter parameters
//! - `GET /strings/filter-by-natural-language` - List via free-text query
//! - `GET /strings/{value}` - Look up by content
//! - `DELETE /strings/{value}` - Delete by content

pub mod config;
pub mod errors;
pub mod response;
pub mod server;
pub mod string_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use string_routes::AppState;
