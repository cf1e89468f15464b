/// Environment variable holding the admin password; required at startup
pub const ADMIN_PASSWORD_ENV: &str = "OPENSEARCH_INITIAL_ADMIN_PASSWORD";
/// Default base URL for a local OpenSearch node
pub const DEFAULT_BASE_URL: &str = "https://localhost:9200";
/// Default username for the cluster admin account
pub const DEFAULT_USERNAME: &str = "admin";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "opensearch-client/0.1.0";
