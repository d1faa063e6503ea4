use address_form::auth::{AuthProvider, User};
use address_form::error::{StoreError, StoreResult};
use async_trait::async_trait;

/// Mock auth provider returning a fixed session.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAuthProvider {
    user: Option<User>,
    fail: bool,
}

#[allow(dead_code)]
impl MockAuthProvider {
    /// Session resolves to nobody signed in.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Session resolves to the given user id.
    pub fn signed_in(user_id: &str) -> Self {
        Self {
            user: Some(User {
                id: user_id.to_string(),
                email: Some(format!("{}@example.cl", user_id)),
            }),
            fail: false,
        }
    }

    /// The lookup itself errors (store unreachable).
    pub fn failing() -> Self {
        Self {
            user: None,
            fail: true,
        }
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn current_user(&self) -> StoreResult<Option<User>> {
        if self.fail {
            return Err(StoreError::HttpError("Connection failed".to_string()));
        }
        Ok(self.user.clone())
    }
}
