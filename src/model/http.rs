//! HTTP transport for the OpenSearch REST API
//!
//! One reqwest client is built at startup and reused for every call; there
//! is no retry or rate limiting layer, a request is one await. Non-success
//! replies are turned into [`AppError::Api`] with the parsed JSON body so
//! callers can classify the remote error and continue.

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{ApiError, AppError};
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Interface for the HTTP transport used by the services
///
/// The services are generic over this trait so they can be exercised against
/// any endpoint, mock servers included.
#[async_trait]
pub trait SearchHttpClient: Send + Sync {
    /// Sends a request and deserializes the JSON reply
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the configured base URL
    /// * `query` - Query string pairs; empty slice for none
    /// * `body` - Optional JSON request body
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned;
}

/// HTTP transport backed by a shared reqwest client
///
/// Basic auth credentials, request timeout and the TLS verification flag all
/// come from [`Config`] and are fixed for the life of the client.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates the transport from a shared configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Transport ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .danger_accept_invalid_certs(config.rest_api.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    fn url_for(&self, path: &str) -> String {
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl SearchHttpClient for HttpClient {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .basic_auth(
                &self.config.credentials.username,
                Some(&self.config.credentials.password),
            )
            .header("Content-Type", "application/json; charset=UTF-8")
            .header("Accept", "application/json; charset=UTF-8");

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read error body for status {}: {}", status, e);
                return Err(AppError::Unexpected(status));
            }
        };
        error!("Request failed with status {}: {}", status, text);
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(v) => v,
            Err(_) => Value::String(text),
        };
        Err(AppError::Api(ApiError { status, body }))
    }
}
