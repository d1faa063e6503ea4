//! Rut value object and the RUT formatting/checksum helpers.
//!
//! A RUT ("rol único tributario") is the Chilean national identifier: a
//! numeric body followed by a mod-11 check character, written `body-dv`
//! where `dv` is a digit or `K`.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonicalize a raw RUT as typed by the user.
///
/// Strips everything that is not an ASCII digit or `k`/`K`, then inserts
/// exactly one hyphen before the final remaining character. Idempotent:
/// formatting an already-formatted value reproduces it unchanged. Empty
/// input (or input with no digits or `k`) yields an empty string.
///
/// # Example
///
/// ```
/// use address_form::domain::format_rut;
///
/// assert_eq!(format_rut("12.345.678-5"), "12345678-5");
/// assert_eq!(format_rut("123456785"), "12345678-5");
/// assert_eq!(format_rut(""), "");
/// ```
pub fn format_rut(raw: &str) -> String {
    let clean: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k' || *c == 'K')
        .collect();

    if clean.is_empty() {
        return String::new();
    }

    // The check character is always the last kept character; everything
    // before it is the body (possibly empty while the user is still typing).
    let split = clean.len() - clean.chars().last().map_or(0, char::len_utf8);
    format!("{}-{}", &clean[..split], &clean[split..])
}

/// Check a formatted RUT against its mod-11 check character.
///
/// The weighted sum runs over the body digits with weights cycling
/// 2, 3, 4, 5, 6, 7 starting from the least significant digit. The
/// expected check character is `11 - (sum % 11)`, with 11 mapping to `0`
/// and 10 mapping to `K`. Comparison with the supplied character is
/// case-insensitive. Empty, digitless, or otherwise malformed input
/// returns `false`; this function never panics.
///
/// # Example
///
/// ```
/// use address_form::domain::validate_rut;
///
/// assert!(validate_rut("12345678-5"));
/// assert!(!validate_rut("12345678-9"));
/// ```
pub fn validate_rut(formatted: &str) -> bool {
    let clean: String = formatted
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'k' || *c == 'K')
        .collect();

    // Need at least one body digit plus the check character.
    if clean.len() < 2 {
        return false;
    }

    let Some(last) = clean.chars().last() else {
        return false;
    };
    let supplied = last.to_ascii_uppercase();
    let body = &clean[..clean.len() - last.len_utf8()];

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    expected_check_char(body) == Some(supplied)
}

/// Compute the mod-11 check character for a numeric body.
fn expected_check_char(body: &str) -> Option<char> {
    let mut sum: u32 = 0;
    let mut weight = 2;

    for c in body.chars().rev() {
        sum += c.to_digit(10)? * weight;
        weight = if weight == 7 { 2 } else { weight + 1 };
    }

    Some(match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        d => char::from_digit(d, 10)?,
    })
}

/// A type-safe wrapper for a validated, canonically formatted RUT.
///
/// Construction formats the raw input and verifies the checksum, so a
/// `Rut` always holds a value like `"12345678-5"`.
///
/// # Example
///
/// ```
/// use address_form::domain::Rut;
///
/// let rut = Rut::new("12.345.678-5").unwrap();
/// assert_eq!(rut.as_str(), "12345678-5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut(String);

impl Rut {
    /// Create a new Rut, formatting the input and validating the checksum.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRut` if the checksum does not match
    /// or the input has no usable body.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let formatted = format_rut(&raw);

        if !validate_rut(&formatted) {
            return Err(ValidationError::InvalidRut(raw));
        }

        // Store the check character uppercased so equality is canonical.
        Ok(Self(formatted.to_ascii_uppercase()))
    }

    /// Get the formatted RUT as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the numeric body (before the hyphen).
    pub fn body(&self) -> &str {
        // SAFETY: Constructor guarantees exactly one hyphen
        self.0
            .split('-')
            .next()
            .expect("rut formatted to contain '-'")
    }

    /// Get the check character (after the hyphen).
    pub fn check_char(&self) -> char {
        // SAFETY: Constructor guarantees a non-empty check character
        self.0
            .chars()
            .last()
            .expect("rut formatted to end in check character")
    }
}

// Serde support - serialize as string
impl Serialize for Rut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rut::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
