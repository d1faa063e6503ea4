//! Data models for the address book.
//!
//! The address record as the remote store returns it, plus the
//! insert/update request payloads the client sends.

pub mod address;

pub use address::{
    AddressCategory, AddressRecord, InsertAddressRequest, Region, UpdateAddressRequest,
    PRIMARY_COUNTRY,
};
