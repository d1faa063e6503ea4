//! Auth provider seam.
//!
//! The form never reaches for a global session: whoever drives it hands an
//! `AuthProvider` into `submit`, which keeps the operation testable in
//! isolation.

use crate::client::AsyncStoreClient;
use crate::error::StoreResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The authenticated user owning the addresses being edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Store-assigned user id
    pub id: String,

    /// Sign-in email, when the store exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Resolves the current session.
///
/// `Ok(None)` means nobody is signed in; `Err` means the lookup itself
/// failed (network, store down).
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn current_user(&self) -> StoreResult<Option<User>>;
}

/// Auth provider backed by the store's `/auth/v1/user` endpoint.
pub struct StoreAuthProvider {
    client: Arc<dyn AsyncStoreClient>,
}

impl StoreAuthProvider {
    pub fn new(client: Arc<dyn AsyncStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthProvider for StoreAuthProvider {
    async fn current_user(&self) -> StoreResult<Option<User>> {
        self.client.current_user().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization_ignores_extra_fields() {
        let json = r#"{"id":"user-1","email":"vecina@example.cl","aud":"authenticated"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.email.as_deref(), Some("vecina@example.cl"));
    }

    #[test]
    fn test_user_email_optional() {
        let user: User = serde_json::from_str(r#"{"id":"user-2"}"#).unwrap();
        assert!(user.email.is_none());
    }
}
