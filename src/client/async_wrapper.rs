//! Async wrapper around the synchronous StoreClient.
//!
//! Runs HTTP operations on `tokio::task::spawn_blocking` so the sync
//! `ureq` calls never block the async runtime.

use crate::auth::User;
use crate::client::StoreClient;
use crate::error::{StoreError, StoreResult};
use crate::models::AddressRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the store operations the form needs.
#[async_trait]
pub trait AsyncStoreClient: Send + Sync {
    async fn insert_address(&self, record: &AddressRecord) -> StoreResult<AddressRecord>;
    async fn update_address(&self, id: &str, record: &AddressRecord) -> StoreResult<AddressRecord>;
    async fn current_user(&self) -> StoreResult<Option<User>>;
}

/// Async wrapper around synchronous StoreClient.
#[derive(Clone)]
pub struct AsyncStoreClientImpl {
    client: Arc<StoreClient>,
}

impl AsyncStoreClientImpl {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncStoreClient for AsyncStoreClientImpl {
    async fn insert_address(&self, record: &AddressRecord) -> StoreResult<AddressRecord> {
        let client = self.client.clone();
        let record = record.clone();

        tokio::task::spawn_blocking(move || client.insert_address(&record))
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn update_address(&self, id: &str, record: &AddressRecord) -> StoreResult<AddressRecord> {
        let client = self.client.clone();
        let id = id.to_string();
        let record = record.clone();

        tokio::task::spawn_blocking(move || client.update_address(&id, &record))
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn current_user(&self) -> StoreResult<Option<User>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.current_user())
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[tokio::test]
    async fn test_async_client_creation() {
        let config = Config {
            store_api_url: "https://store.test".to_string(),
            store_api_key: "test_key".to_string(),
            store_auth_token: None,
            request_timeout: 10,
            log_level: "error".to_string(),
        };
        let client = StoreClient::new(&config);
        let async_client = AsyncStoreClientImpl::new(client);

        // Should be able to clone
        let _cloned = async_client.clone();
    }
}
