//! Error types for the OpenSearch client
//!
//! There are two families of failure: local setup problems (missing
//! credential, client construction) and remote API errors. Remote errors are
//! carried as [`AppError::Api`] with the HTTP status and the JSON body the
//! cluster returned, so callers can classify them and keep going.

use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// A required environment variable is not set
    MissingEnv(String),
    /// Underlying HTTP transport error
    Network(reqwest::Error),
    /// JSON serialization or deserialization error
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
    /// The cluster answered with a non-success status
    Api(ApiError),
    /// Non-success status whose body could not be read
    Unexpected(StatusCode),
    /// Invalid input supplied by the caller
    InvalidInput(String),
}

/// A non-2xx reply from the cluster, with its parsed JSON body
///
/// Most endpoints answer errors with a standard envelope:
///
/// ```json
/// {"error": {"type": "index_not_found_exception", "reason": "..."}, "status": 404}
/// ```
///
/// Deleting a document that does not exist is the exception: the 404 body is
/// shaped like a document write response (`"result": "not_found"`) with no
/// `error` object at all. [`ApiError::kind`] returns `None` in that case;
/// use [`ApiError::document_result`] instead.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status of the reply
    pub status: StatusCode,
    /// JSON body of the reply; a JSON string if the body was not valid JSON
    pub body: Value,
}

impl ApiError {
    /// Returns the `error.type` field of the standard error envelope, if any
    pub fn kind(&self) -> Option<&str> {
        self.body.get("error")?.get("type")?.as_str()
    }

    /// Returns the `error.reason` field of the standard error envelope, if any
    pub fn reason(&self) -> Option<&str> {
        self.body.get("error")?.get("reason")?.as_str()
    }

    /// Returns the top-level `result` field for document-shaped error bodies
    pub fn document_result(&self) -> Option<&str> {
        self.body.get("result")?.as_str()
    }

    /// True when the body reports `resource_already_exists_exception`
    pub fn is_already_exists(&self) -> bool {
        self.kind() == Some("resource_already_exists_exception")
    }

    /// True when the body reports `index_not_found_exception`
    pub fn is_index_not_found(&self) -> bool {
        self.kind() == Some("index_not_found_exception")
    }

    /// True when the body reports `version_conflict_engine_exception`
    pub fn is_version_conflict(&self) -> bool {
        self.kind() == Some("version_conflict_engine_exception")
    }

    /// True when the body is a document write response reporting `not_found`
    pub fn is_document_missing(&self) -> bool {
        self.document_result() == Some("not_found")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api error ({}):\n{:#}", self.status, self.body)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingEnv(name) => write!(f, "missing environment variable: {name}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Api(e) => write!(f, "{e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
