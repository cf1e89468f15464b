use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for deleting one or more indices
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicesDeleteRequest<'a> {
    /// Indices to delete; sent as a comma-separated list
    #[serde(borrow)]
    pub indices: Vec<&'a str>,
    /// When true, a missing index is a no-op instead of an
    /// `index_not_found_exception`. Unset omits the query parameter.
    pub ignore_unavailable: Option<bool>,
}

impl<'a> IndicesDeleteRequest<'a> {
    /// Create new parameters with the indices to delete (required field)
    pub fn new(indices: Vec<&'a str>) -> Self {
        Self {
            indices,
            ..Default::default()
        }
    }

    /// Set the ignore_unavailable flag
    pub fn with_ignore_unavailable(mut self, ignore_unavailable: bool) -> Self {
        self.ignore_unavailable = Some(ignore_unavailable);
        self
    }
}

/// Parameters for creating a document with an explicit identifier
///
/// The create endpoint is create-only: a second call with the same id fails
/// with `version_conflict_engine_exception` instead of overwriting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentCreateRequest<'a> {
    /// Target index
    pub index: &'a str,
    /// Document identifier
    pub id: &'a str,
    /// Document body
    pub body: Value,
}

impl<'a> DocumentCreateRequest<'a> {
    /// Create new parameters for a document create call
    pub fn new(index: &'a str, id: &'a str, body: Value) -> Self {
        Self { index, id, body }
    }
}

/// Parameters for deleting a document by identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDeleteRequest<'a> {
    /// Target index
    pub index: &'a str,
    /// Document identifier
    pub id: &'a str,
}

impl<'a> DocumentDeleteRequest<'a> {
    /// Create new parameters for a document delete call
    pub fn new(index: &'a str, id: &'a str) -> Self {
        Self { index, id }
    }
}
