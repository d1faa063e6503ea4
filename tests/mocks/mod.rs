//! Shared test doubles for the form's collaborators.

mod mock_address_repository;
mod mock_auth_provider;
mod mock_notifier;

pub use mock_address_repository::MockAddressRepository;
pub use mock_auth_provider::MockAuthProvider;
pub use mock_notifier::MockNotifier;
