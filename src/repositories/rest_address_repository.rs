use crate::client::AsyncStoreClient;
use crate::error::StoreResult;
use crate::models::AddressRecord;
use crate::repositories::traits::AddressRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Address repository backed by the store's REST API.
///
/// Thin delegation to the AsyncStoreClient; exists so the rest of the
/// crate depends on the repository trait rather than the HTTP client.
pub struct RestAddressRepository {
    client: Arc<dyn AsyncStoreClient>,
}

impl RestAddressRepository {
    /// Create a new RestAddressRepository with the given client.
    pub fn new(client: Arc<dyn AsyncStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AddressRepository for RestAddressRepository {
    async fn insert(&self, record: &AddressRecord) -> StoreResult<AddressRecord> {
        self.client.insert_address(record).await
    }

    async fn update(&self, id: &str, record: &AddressRecord) -> StoreResult<AddressRecord> {
        self.client.update_address(id, record).await
    }
}
