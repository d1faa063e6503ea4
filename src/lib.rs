//! Address form component for a Supabase-style address book.
//!
//! Collects and validates a postal address plus contact metadata for the
//! Chilean locale, then persists it through the remote store's
//! insert/update API. The crate is meant to be embedded in a larger
//! application, which supplies the auth session and the notification
//! surface through the trait seams defined here.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (RUT, email, phone) and the pure
//!   RUT formatting/checksum helpers
//! - **regions**: static catalog of Chilean regions
//! - **models**: the address record and store request payloads
//! - **client**: sync `ureq` client for the store plus its async wrapper
//! - **repositories**: persistence trait and its REST implementation
//! - **auth** / **notify**: collaborator seams
//! - **form**: the editing/submitting state machine
//! - **config** / **error**: environment config and crate error types

pub mod auth;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod models;
pub mod notify;
pub mod regions;
pub mod repositories;

pub use auth::{AuthProvider, StoreAuthProvider, User};
pub use client::{AsyncStoreClient, AsyncStoreClientImpl, StoreClient};
pub use config::Config;
pub use error::{ConfigError, StoreError, SubmitError};
pub use form::{AddressForm, FormState, SubmitOutcome};
pub use models::{AddressCategory, AddressRecord, Region};
pub use notify::{Notifier, Severity, TracingNotifier};
pub use regions::{region_by_code, RegionEntry, CHILEAN_REGIONS};
pub use repositories::{AddressRepository, RestAddressRepository};
