use crate::error::StoreResult;
use crate::models::AddressRecord;
use async_trait::async_trait;

/// Repository for persisting addresses.
///
/// The form performs exactly one of these per successful submission:
/// `insert` in create mode, `update` in edit mode. There is no delete
/// path; the surrounding application never removes addresses here.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Insert a new address, returning the persisted record with its
    /// server-assigned id.
    async fn insert(&self, record: &AddressRecord) -> StoreResult<AddressRecord>;

    /// Update an existing address by id, returning the updated record.
    async fn update(&self, id: &str, record: &AddressRecord) -> StoreResult<AddressRecord>;
}
