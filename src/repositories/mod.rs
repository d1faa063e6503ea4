//! Repository layer.
//!
//! Abstracts address persistence behind a trait so the form can be driven
//! against the REST-backed store in production and an in-memory mock in
//! tests.

mod rest_address_repository;
mod traits;

pub use rest_address_repository::RestAddressRepository;
pub use traits::AddressRepository;
