use crate::error::AppError;
use crate::model::requests::IndicesDeleteRequest;
use crate::model::responses::{IndicesCreateResponse, IndicesDeleteResponse};
use async_trait::async_trait;

/// Interface for the indices service
#[async_trait]
pub trait IndicesService: Send + Sync {
    /// Creates an index with default settings
    ///
    /// Creating an index that already exists fails with
    /// `resource_already_exists_exception`.
    ///
    /// # Arguments
    /// * `index` - Name of the index to create
    async fn create_index(&self, index: &str) -> Result<IndicesCreateResponse, AppError>;

    /// Deletes one or more indices
    ///
    /// With `ignore_unavailable` set to true a missing index is a no-op;
    /// without it the cluster answers `index_not_found_exception`.
    ///
    /// # Arguments
    /// * `request` - Indices to delete and the ignore_unavailable flag
    async fn delete_index(
        &self,
        request: &IndicesDeleteRequest<'_>,
    ) -> Result<IndicesDeleteResponse, AppError>;
}
