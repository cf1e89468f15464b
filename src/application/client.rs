//! Client facade for the OpenSearch REST API
//!
//! Wires configuration, the HTTP transport and the lifecycle services into
//! one handle. The facade implements the service traits by delegation, so
//! call sites use `client.create_index(...)` directly.
//!
//! # Example
//! ```ignore
//! use opensearch_client::prelude::*;
//!
//! let config = Config::from_env()?;
//! let client = Client::new(config)?;
//! let resp = client.create_index("movies").await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::documents::DocumentService;
use crate::application::interfaces::indices::IndicesService;
use crate::application::services::document_service::DocumentServiceImpl;
use crate::application::services::indices_service::IndicesServiceImpl;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{DocumentCreateRequest, DocumentDeleteRequest, IndicesDeleteRequest};
use crate::model::responses::{DocumentResponse, IndicesCreateResponse, IndicesDeleteResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Client for the OpenSearch REST API
pub struct Client {
    config: Arc<Config>,
    indices: IndicesServiceImpl<HttpClient>,
    documents: DocumentServiceImpl<HttpClient>,
}

impl Client {
    /// Creates a new client from a configuration
    ///
    /// Builds the shared HTTP transport once; construction fails if the
    /// underlying HTTP client cannot be built.
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the transport cannot be constructed
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let transport = Arc::new(HttpClient::new(config.clone())?);

        Ok(Self {
            indices: IndicesServiceImpl::new(transport.clone()),
            documents: DocumentServiceImpl::new(transport),
            config,
        })
    }

    /// Gets the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the indices service
    pub fn indices(&self) -> &impl IndicesService {
        &self.indices
    }

    /// Gets the document service
    pub fn documents(&self) -> &impl DocumentService {
        &self.documents
    }
}

#[async_trait]
impl IndicesService for Client {
    async fn create_index(&self, index: &str) -> Result<IndicesCreateResponse, AppError> {
        self.indices.create_index(index).await
    }

    async fn delete_index(
        &self,
        request: &IndicesDeleteRequest<'_>,
    ) -> Result<IndicesDeleteResponse, AppError> {
        self.indices.delete_index(request).await
    }
}

#[async_trait]
impl DocumentService for Client {
    async fn create_document(
        &self,
        request: &DocumentCreateRequest<'_>,
    ) -> Result<DocumentResponse, AppError> {
        self.documents.create_document(request).await
    }

    async fn delete_document(
        &self,
        request: &DocumentDeleteRequest<'_>,
    ) -> Result<DocumentResponse, AppError> {
        self.documents.delete_document(request).await
    }
}
