use crate::error::AppError;
use crate::model::requests::{DocumentCreateRequest, DocumentDeleteRequest};
use crate::model::responses::DocumentResponse;
use async_trait::async_trait;

/// Interface for the document service
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Creates a document under an explicit identifier
    ///
    /// Create-only semantics: if the id is already taken the cluster answers
    /// `version_conflict_engine_exception`.
    ///
    /// # Arguments
    /// * `request` - Target index, document id and JSON body
    async fn create_document(
        &self,
        request: &DocumentCreateRequest<'_>,
    ) -> Result<DocumentResponse, AppError>;

    /// Deletes a document by identifier
    ///
    /// Deleting a missing document fails with a 404 whose body is shaped
    /// like a document write response (`result: "not_found"`) rather than
    /// the standard error envelope used by the index endpoints.
    ///
    /// # Arguments
    /// * `request` - Target index and document id
    async fn delete_document(
        &self,
        request: &DocumentDeleteRequest<'_>,
    ) -> Result<DocumentResponse, AppError>;
}
