//! # OpenSearch Client Prelude
//!
//! Convenient re-exports of the types and traits needed for most uses of
//! the crate.
//!
//! ## Usage
//!
//! ```rust
//! use opensearch_client::prelude::*;
//!
//! let config = Config::with_credentials("https://localhost:9200", "admin", "secret");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the OpenSearch client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error types for the library
pub use crate::error::{ApiError, AppError};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Document service trait
pub use crate::application::interfaces::documents::DocumentService;

/// Indices service trait
pub use crate::application::interfaces::indices::IndicesService;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    DocumentCreateRequest, DocumentDeleteRequest, IndicesDeleteRequest,
};

/// Response models
pub use crate::model::responses::{
    DocumentResponse, IndicesCreateResponse, IndicesDeleteResponse, ShardStats,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::setup_logger;
