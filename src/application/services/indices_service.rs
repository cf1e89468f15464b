use crate::application::interfaces::indices::IndicesService;
use crate::error::AppError;
use crate::model::http::SearchHttpClient;
use crate::model::requests::IndicesDeleteRequest;
use crate::model::responses::{IndicesCreateResponse, IndicesDeleteResponse};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

/// Implementation of the indices service
pub struct IndicesServiceImpl<T: SearchHttpClient> {
    client: Arc<T>,
}

impl<T: SearchHttpClient> IndicesServiceImpl<T> {
    /// Creates a new instance of the indices service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: SearchHttpClient + 'static> IndicesService for IndicesServiceImpl<T> {
    async fn create_index(&self, index: &str) -> Result<IndicesCreateResponse, AppError> {
        if index.is_empty() {
            return Err(AppError::InvalidInput("index name is empty".to_string()));
        }
        info!("Creating index '{}'", index);
        self.client
            .request(Method::PUT, &format!("/{index}"), &[], None::<&()>)
            .await
    }

    async fn delete_index(
        &self,
        request: &IndicesDeleteRequest<'_>,
    ) -> Result<IndicesDeleteResponse, AppError> {
        if request.indices.is_empty() || request.indices.iter().any(|i| i.is_empty()) {
            return Err(AppError::InvalidInput(
                "at least one non-empty index name is required".to_string(),
            ));
        }
        let indices = request.indices.join(",");
        info!(
            "Deleting indices '{}' (ignore_unavailable: {:?})",
            indices, request.ignore_unavailable
        );

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(ignore) = request.ignore_unavailable {
            query.push(("ignore_unavailable", ignore.to_string()));
        }

        self.client
            .request(Method::DELETE, &format!("/{indices}"), &query, None::<&()>)
            .await
    }
}
