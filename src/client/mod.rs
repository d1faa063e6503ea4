//! HTTP client for the remote address store's REST API.
//!
//! The store exposes a PostgREST-style surface (`/rest/v1/<table>` with
//! row filters in the query string) plus a `/auth/v1/user` endpoint for
//! resolving the current session. The client is synchronous (`ureq`) and
//! is driven from async contexts through `tokio::task::spawn_blocking`;
//! see [`async_wrapper`].

mod async_wrapper;
pub use async_wrapper::{AsyncStoreClient, AsyncStoreClientImpl};

use crate::auth::User;
use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::models::{AddressRecord, InsertAddressRequest, UpdateAddressRequest};
use std::sync::Arc;
use std::time::Duration;

/// Table holding address rows.
const ADDRESSES_TABLE: &str = "addresses";

/// Synchronous client for the address store.
#[derive(Clone)]
pub struct StoreClient {
    /// Base URL of the store
    base_url: String,

    /// Project API key, sent on every request
    api_key: String,

    /// Bearer token of the signed-in session, when one exists
    auth_token: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl StoreClient {
    /// Create a new StoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.store_api_url.clone(),
            api_key: config.store_api_key.clone(),
            auth_token: config.store_auth_token.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a StoreClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            auth_token: None,
            agent: Arc::new(agent),
        }
    }

    /// Replace the session bearer token.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Token presented as the bearer; the anon key when nobody is signed in.
    fn bearer(&self) -> String {
        format!(
            "Bearer {}",
            self.auth_token.as_deref().unwrap_or(&self.api_key)
        )
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, StoreError> {
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        self.agent
            .get(&url)
            .set("apikey", &self.api_key)
            .set("Authorization", &self.bearer())
            .call()
            .map_err(map_error)
    }

    /// Execute a POST request with authentication and JSON body, asking the
    /// store to echo the written rows back.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, StoreError> {
        let url = self.build_url(path);
        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("apikey", &self.api_key)
            .set("Authorization", &self.bearer())
            .set("Content-Type", "application/json")
            .set("Prefer", "return=representation")
            .send_json(body)
            .map_err(map_error);

        if let Err(ref e) = result {
            tracing::error!("POST {} - Error: {:?}", url, e);
        }
        result
    }

    /// Execute a PATCH request with authentication and JSON body.
    fn patch(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, StoreError> {
        let url = self.build_url(path);
        tracing::debug!("PATCH {}", url);

        let result = self
            .agent
            .request("PATCH", &url)
            .set("apikey", &self.api_key)
            .set("Authorization", &self.bearer())
            .set("Content-Type", "application/json")
            .set("Prefer", "return=representation")
            .send_json(body)
            .map_err(map_error);

        if let Err(ref e) = result {
            tracing::error!("PATCH {} - Error: {:?}", url, e);
        }
        result
    }

    // ========================= Address Operations =========================

    /// Insert a new address row, returning the persisted record with its
    /// server-assigned id and timestamps.
    pub fn insert_address(&self, record: &AddressRecord) -> StoreResult<AddressRecord> {
        let request = InsertAddressRequest::from(record);
        // PostgREST bulk-insert shape: an array of rows
        let body = serde_json::to_value(vec![&request]).map_err(StoreError::JsonError)?;

        let response = self.post(&format!("/rest/v1/{}", ADDRESSES_TABLE), &body)?;
        let rows = read_rows(response)?;

        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Other("insert returned no rows".to_string()))
    }

    /// Update an existing address row by id, returning the updated record.
    pub fn update_address(&self, id: &str, record: &AddressRecord) -> StoreResult<AddressRecord> {
        let request = UpdateAddressRequest::from(record);
        let body = serde_json::to_value(&request).map_err(StoreError::JsonError)?;

        let path = format!(
            "/rest/v1/{}?id=eq.{}",
            ADDRESSES_TABLE,
            urlencoding::encode(id)
        );
        let response = self.patch(&path, &body)?;
        let rows = read_rows(response)?;

        // An empty representation means the filter matched nothing.
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("address {}", id)))
    }

    // ========================== Auth Operations ==========================

    /// Resolve the current session's user, or `None` when nobody is
    /// signed in (including when the store rejects the token).
    pub fn current_user(&self) -> StoreResult<Option<User>> {
        if self.auth_token.is_none() {
            return Ok(None);
        }

        match self.get("/auth/v1/user") {
            Ok(response) => {
                let body = response
                    .into_string()
                    .map_err(|e| StoreError::HttpError(e.to_string()))?;
                let user: User = serde_json::from_str(&body).map_err(StoreError::JsonError)?;
                Ok(Some(user))
            }
            Err(StoreError::Unauthorized) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Read a JSON array of address rows out of a response body.
fn read_rows(response: ureq::Response) -> StoreResult<Vec<AddressRecord>> {
    let body = response
        .into_string()
        .map_err(|e| StoreError::HttpError(e.to_string()))?;

    serde_json::from_str(&body).map_err(StoreError::JsonError)
}

/// Map a ureq error to a StoreError.
fn map_error(error: ureq::Error) -> StoreError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());

            match code {
                401 => StoreError::Unauthorized,
                404 => StoreError::NotFound(message),
                400 | 422 => StoreError::InvalidRequest(message),
                _ => StoreError::ApiError {
                    status: code,
                    message,
                },
            }
        }
        ureq::Error::Transport(transport) => {
            if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                StoreError::HttpError("Connection failed".to_string())
            } else if transport.kind() == ureq::ErrorKind::Io {
                StoreError::Timeout
            } else {
                StoreError::HttpError(transport.to_string())
            }
        }
    }
}
