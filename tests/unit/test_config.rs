use once_cell::sync::Lazy;
use opensearch_client::application::config::Config;
use opensearch_client::constants::ADMIN_PASSWORD_ENV;
use opensearch_client::error::AppError;
use opensearch_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;
use std::sync::Mutex;

// Tests in this file mutate shared process environment variables
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_from_env_without_password_fails() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        env::remove_var(ADMIN_PASSWORD_ENV);
    }
    let err = Config::from_env().err().expect("should be Err");
    match err {
        AppError::MissingEnv(name) => assert_eq!(name, ADMIN_PASSWORD_ENV),
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        env::set_var(ADMIN_PASSWORD_ENV, "secret");
        env::remove_var("OPENSEARCH_URL");
        env::remove_var("OPENSEARCH_USERNAME");
        env::remove_var("OPENSEARCH_REST_TIMEOUT");
        env::remove_var("OPENSEARCH_ACCEPT_INVALID_CERTS");
    }
    let config = Config::from_env().expect("should be Ok");
    assert_eq!(config.credentials.username, "admin");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(config.rest_api.base_url, "https://localhost:9200");
    assert_eq!(config.rest_api.timeout, 30);
    assert!(config.rest_api.accept_invalid_certs);
    unsafe {
        env::remove_var(ADMIN_PASSWORD_ENV);
    }
}

#[test]
fn test_from_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        env::set_var(ADMIN_PASSWORD_ENV, "hunter2");
        env::set_var("OPENSEARCH_URL", "https://search.example.com:9200");
        env::set_var("OPENSEARCH_USERNAME", "ops");
        env::set_var("OPENSEARCH_REST_TIMEOUT", "5");
        env::set_var("OPENSEARCH_ACCEPT_INVALID_CERTS", "false");
    }
    let config = Config::from_env().expect("should be Ok");
    assert_eq!(config.credentials.username, "ops");
    assert_eq!(config.credentials.password, "hunter2");
    assert_eq!(config.rest_api.base_url, "https://search.example.com:9200");
    assert_eq!(config.rest_api.timeout, 5);
    assert!(!config.rest_api.accept_invalid_certs);
    unsafe {
        env::remove_var(ADMIN_PASSWORD_ENV);
        env::remove_var("OPENSEARCH_URL");
        env::remove_var("OPENSEARCH_USERNAME");
        env::remove_var("OPENSEARCH_REST_TIMEOUT");
        env::remove_var("OPENSEARCH_ACCEPT_INVALID_CERTS");
    }
}

#[test]
fn test_with_credentials() {
    let config = Config::with_credentials("http://127.0.0.1:9200", "admin", "secret");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:9200");
    assert_eq!(config.credentials.username, "admin");
    assert_eq!(config.credentials.password, "secret");
    assert!(config.rest_api.accept_invalid_certs);
}

#[test]
fn test_get_env_or_default_with_existing_var() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        env::set_var("TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        env::set_var("TEST_VAR_INVALID", "not_a_number");
        let result: i32 = get_env_or_default("TEST_VAR_INVALID", 99);
        assert_eq!(result, 99); // Should return default
        env::remove_var("TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        env::remove_var("MISSING_VAR_OPTION");
    }
    let result: Option<i32> = get_env_or_none("MISSING_VAR_OPTION");
    assert_eq!(result, None);
}
