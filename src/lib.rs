//! # OpenSearch Client
//!
//! A small async client for the OpenSearch REST API covering the index and
//! document lifecycle: create/delete index, create/delete document. It is
//! built around a typed transport ([`model::http::HttpClient`]), serde
//! request/response models and service traits, plus a demo binary that runs
//! the whole lifecycle against a live cluster and pretty-prints every
//! response.
//!
//! ## Usage
//!
//! ```ignore
//! use opensearch_client::prelude::*;
//!
//! let config = Config::from_env()?;
//! let client = Client::new(config)?;
//!
//! let created = client.create_index("movies").await?;
//! println!("{}", serde_json::to_string_pretty(&created)?);
//! ```
//!
//! Per-operation failures come back as [`error::AppError::Api`] carrying the
//! HTTP status and the JSON error body, so callers can classify the usual
//! suspects (already-exists, index-not-found, version-conflict) and decide
//! whether to continue.

/// Application layer: configuration, client facade, service traits and
/// implementations
pub mod application;
/// Constants used throughout the crate
pub mod constants;
/// Error types for the crate
pub mod error;
/// Data models: transport, requests and responses
pub mod model;
/// Commonly used types re-exported for convenience
pub mod prelude;
/// Utility modules: env config helpers and logging setup
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
