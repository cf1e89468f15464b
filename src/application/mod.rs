/// Client facade wiring config, transport and services
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing the service implementations
pub mod services;
