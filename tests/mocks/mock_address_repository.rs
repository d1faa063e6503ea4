use address_form::error::{StoreError, StoreResult};
use address_form::models::AddressRecord;
use address_form::repositories::AddressRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address repository for testing.
///
/// In-memory implementation of AddressRepository that records every call
/// (method counts plus the records passed in) so tests can assert on
/// exactly what the form wrote.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAddressRepository {
    rows: Arc<Mutex<HashMap<String, AddressRecord>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    inserted: Arc<Mutex<Vec<AddressRecord>>>,
    updated: Arc<Mutex<Vec<(String, AddressRecord)>>>,
    fail_with: Arc<Mutex<Option<String>>>,
    next_id: Arc<Mutex<u32>>,
}

#[allow(dead_code)]
impl MockAddressRepository {
    /// Create a new empty MockAddressRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing row (for edit-mode tests).
    pub fn add_row(&self, record: AddressRecord) {
        let id = record.id.clone().expect("seeded row needs an id");
        self.rows.lock().unwrap().insert(id, record);
    }

    /// Make every subsequent write fail with the given message.
    pub fn fail_writes(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    /// Records passed to `insert`, in order.
    pub fn inserted_records(&self) -> Vec<AddressRecord> {
        self.inserted.lock().unwrap().clone()
    }

    /// `(id, record)` pairs passed to `update`, in order.
    pub fn updated_records(&self) -> Vec<(String, AddressRecord)> {
        self.updated.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }

    fn check_failure(&self) -> StoreResult<()> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(StoreError::ApiError {
                status: 500,
                message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AddressRepository for MockAddressRepository {
    async fn insert(&self, record: &AddressRecord) -> StoreResult<AddressRecord> {
        self.track_call("insert");
        self.inserted.lock().unwrap().push(record.clone());
        self.check_failure()?;

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let mut persisted = record.clone();
        persisted.id = Some(format!("addr-{}", *next_id));
        persisted.created_at = Some("2024-05-01T12:00:00Z".to_string());

        self.rows
            .lock()
            .unwrap()
            .insert(persisted.id.clone().unwrap(), persisted.clone());
        Ok(persisted)
    }

    async fn update(&self, id: &str, record: &AddressRecord) -> StoreResult<AddressRecord> {
        self.track_call("update");
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), record.clone()));
        self.check_failure()?;

        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(id) {
            return Err(StoreError::NotFound(format!("address {}", id)));
        }

        let mut persisted = record.clone();
        persisted.id = Some(id.to_string());
        persisted.updated_at = Some("2024-05-02T12:00:00Z".to_string());

        rows.insert(id.to_string(), persisted.clone());
        Ok(persisted)
    }
}
