use crate::application::interfaces::documents::DocumentService;
use crate::error::AppError;
use crate::model::http::SearchHttpClient;
use crate::model::requests::{DocumentCreateRequest, DocumentDeleteRequest};
use crate::model::responses::DocumentResponse;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

/// Implementation of the document service
pub struct DocumentServiceImpl<T: SearchHttpClient> {
    client: Arc<T>,
}

impl<T: SearchHttpClient> DocumentServiceImpl<T> {
    /// Creates a new instance of the document service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    fn validate(index: &str, id: &str) -> Result<(), AppError> {
        if index.is_empty() {
            return Err(AppError::InvalidInput("index name is empty".to_string()));
        }
        if id.is_empty() {
            return Err(AppError::InvalidInput("document id is empty".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: SearchHttpClient + 'static> DocumentService for DocumentServiceImpl<T> {
    async fn create_document(
        &self,
        request: &DocumentCreateRequest<'_>,
    ) -> Result<DocumentResponse, AppError> {
        Self::validate(request.index, request.id)?;
        info!("Creating document '{}' in index '{}'", request.id, request.index);
        self.client
            .request(
                Method::PUT,
                &format!("/{}/_create/{}", request.index, request.id),
                &[],
                Some(&request.body),
            )
            .await
    }

    async fn delete_document(
        &self,
        request: &DocumentDeleteRequest<'_>,
    ) -> Result<DocumentResponse, AppError> {
        Self::validate(request.index, request.id)?;
        info!("Deleting document '{}' from index '{}'", request.id, request.index);
        self.client
            .request(
                Method::DELETE,
                &format!("/{}/_doc/{}", request.index, request.id),
                &[],
                None::<&()>,
            )
            .await
    }
}
