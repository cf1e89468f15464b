use crate::constants::{ADMIN_PASSWORD_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME};
use crate::error::AppError;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the cluster
pub struct Credentials {
    /// Username for basic auth
    pub username: String,
    /// Password for basic auth; never serialized so it cannot leak into logs
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the cluster, e.g. `https://localhost:9200`
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// Skip TLS certificate verification. Test-only posture: local clusters
    /// ship with a self-signed certificate.
    pub accept_invalid_certs: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the OpenSearch client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Builds the configuration from environment variables
    ///
    /// Loads `.env` first, then reads:
    /// - `OPENSEARCH_INITIAL_ADMIN_PASSWORD` (required)
    /// - `OPENSEARCH_URL` (default `https://localhost:9200`)
    /// - `OPENSEARCH_USERNAME` (default `admin`)
    /// - `OPENSEARCH_REST_TIMEOUT` (default 30)
    /// - `OPENSEARCH_ACCEPT_INVALID_CERTS` (default `true`)
    ///
    /// # Returns
    /// * `Ok(Config)` - Configuration ready to use
    /// * `Err(AppError::MissingEnv)` - If the admin password is not set
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let password = env::var(ADMIN_PASSWORD_ENV)
            .map_err(|_| AppError::MissingEnv(ADMIN_PASSWORD_ENV.to_string()))?;

        Ok(Config {
            credentials: Credentials {
                username: get_env_or_default(
                    "OPENSEARCH_USERNAME",
                    String::from(DEFAULT_USERNAME),
                ),
                password,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "OPENSEARCH_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("OPENSEARCH_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                accept_invalid_certs: get_env_or_default("OPENSEARCH_ACCEPT_INVALID_CERTS", true),
            },
        })
    }

    /// Builds a configuration with explicit values, bypassing the environment
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the cluster
    /// * `username` - Username for basic auth
    /// * `password` - Password for basic auth
    pub fn with_credentials(base_url: &str, username: &str, password: &str) -> Self {
        Config {
            credentials: Credentials {
                username: username.to_string(),
                password: password.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
                accept_invalid_certs: true,
            },
        }
    }
}
