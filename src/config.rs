//! Configuration management for the address form's store access.
//!
//! Loads and validates configuration from environment variables, with an
//! optional `.env` file via dotenvy.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the store client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store base URL (REST and auth endpoints hang off it)
    pub store_api_url: String,

    /// Project API key sent with every request
    pub store_api_key: String,

    /// Session bearer token, when a user is signed in
    pub store_auth_token: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `STORE_API_BASE_URL`: Base URL for the store
    /// - `STORE_API_KEY`: Project API key
    ///
    /// Optional environment variables:
    /// - `STORE_AUTH_TOKEN`: Bearer token of the signed-in session
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; absence is fine.
        let _ = dotenvy::dotenv();

        let store_api_url = env::var("STORE_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("STORE_API_BASE_URL".to_string()))?;

        let store_api_key = env::var("STORE_API_KEY")
            .map_err(|_| ConfigError::MissingVar("STORE_API_KEY".to_string()))?;

        if !store_api_url.starts_with("http://") && !store_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "STORE_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if store_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "STORE_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let store_auth_token = env::var("STORE_AUTH_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            store_api_url,
            store_api_key,
            store_auth_token,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_api_url: String::new(),
            store_api_key: String::new(),
            store_auth_token: None,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
