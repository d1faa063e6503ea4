//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The RUT failed the mod-11 checksum or has no usable body.
    InvalidRut(String),

    /// A Chilean address is missing its RUT.
    MissingRut,

    /// The region code is not in the Chilean region catalog.
    UnknownRegion(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRut(rut) => write!(f, "Invalid RUT: {}", rut),
            Self::MissingRut => write!(f, "A RUT is required for Chilean addresses"),
            Self::UnknownRegion(code) => write!(f, "Unknown region: {}", code),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
