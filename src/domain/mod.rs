//! Domain value objects and types.
//!
//! Type-safe wrappers for the form's contact fields: the Chilean RUT
//! (national identifier with check digit), email addresses, and phone
//! numbers. Value objects validate at construction time so invalid data
//! cannot be represented further in.

pub mod email;
pub mod errors;
pub mod phone;
pub mod rut;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use rut::{format_rut, validate_rut, Rut};
