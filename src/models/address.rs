//! Address record model and the store request payloads.

use crate::domain::{EmailAddress, PhoneNumber, Rut, ValidationError};
use crate::regions::is_valid_region;
use serde::{Deserialize, Serialize};

/// Identifier-bearing locale: addresses in this country carry a RUT and
/// pick their region from the catalog.
pub const PRIMARY_COUNTRY: &str = "CL";

/// What kind of contact an address belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressCategory {
    #[default]
    Home,
    Work,
    Neighbor,
    Friend,
    Family,
    Concierge,
    Other,
}

/// Region field of an address.
///
/// Chilean addresses select a region from the fixed catalog; any other
/// country gets free text. Keeping the two modes as variants means code
/// handling one cannot silently fall through to the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    /// Catalog code for a Chilean region (e.g. `"RM"`)
    Chile(String),
    /// Free-text region/state for any other country
    Foreign(String),
}

impl Region {
    /// The raw string stored in the `region` column.
    pub fn as_str(&self) -> &str {
        match self {
            Region::Chile(code) => code,
            Region::Foreign(text) => text,
        }
    }

    /// Rebuild the variant from a stored record's country + region columns.
    pub fn from_record(country: &str, region: &str) -> Self {
        if country == PRIMARY_COUNTRY {
            Region::Chile(region.to_string())
        } else {
            Region::Foreign(region.to_string())
        }
    }
}

/// An address row as the store returns it.
///
/// `id`, `created_at` and `updated_at` are assigned server-side; they are
/// `None` on a record that has not been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AddressRecord {
    /// Row id assigned by the store on insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Owning user's id
    pub user_id: String,

    /// Short label shown in lists ("Casa", "Oficina", ...)
    pub label: String,

    /// Street and number
    pub street: String,

    /// City or comuna
    pub city: String,

    /// Region code (Chile) or free-text state/province (elsewhere)
    pub region: String,

    /// Postal code, optional even for Chilean addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// ISO-2 country code
    pub country: String,

    /// Marks the user's preferred address; at most one per user,
    /// enforced server-side
    pub is_default: bool,

    /// Contact category for this address
    pub category: AddressCategory,

    /// Contact's full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Contact's RUT, canonically formatted; required when country is CL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,

    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// When the row was created (ISO 8601, set by the store)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// When the row was last updated (ISO 8601, set by the store)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl AddressRecord {
    /// Create a blank record for a country, defaulting to Chile.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }

    /// The region field as its tagged variant.
    pub fn region(&self) -> Region {
        Region::from_record(&self.country, &self.region)
    }

    /// Whether this record belongs to the identifier-bearing locale.
    pub fn is_primary_country(&self) -> bool {
        self.country == PRIMARY_COUNTRY
    }

    /// Validate the record's invariants before a write.
    ///
    /// - A Chilean record must carry a RUT and a catalog region.
    /// - A RUT, when present, must pass the mod-11 checksum.
    /// - Email and phone, when present, must be well-formed.
    ///
    /// # Errors
    ///
    /// Returns the first failing `ValidationError`; the caller surfaces it
    /// as a user-visible validation notification.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.national_id {
            Some(rut) if !rut.is_empty() => {
                Rut::new(rut.as_str())?;
            }
            _ if self.is_primary_country() => return Err(ValidationError::MissingRut),
            _ => {}
        }

        if self.is_primary_country() && !is_valid_region(&self.region) {
            return Err(ValidationError::UnknownRegion(self.region.clone()));
        }

        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            EmailAddress::new(email)?;
        }
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.is_empty()) {
            PhoneNumber::new(phone)?;
        }

        Ok(())
    }
}

/// Insert payload: the record minus the server-assigned columns.
///
/// PostgREST inserts take an array of rows, so the client wraps one of
/// these in a single-element array on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct InsertAddressRequest {
    user_id: String,
    label: String,
    street: String,
    city: String,
    region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
    country: String,
    is_default: bool,
    category: AddressCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    national_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

impl From<&AddressRecord> for InsertAddressRequest {
    fn from(record: &AddressRecord) -> Self {
        Self {
            user_id: record.user_id.clone(),
            label: record.label.clone(),
            street: record.street.clone(),
            city: record.city.clone(),
            region: record.region.clone(),
            postal_code: record.postal_code.clone(),
            country: record.country.clone(),
            is_default: record.is_default,
            category: record.category,
            full_name: record.full_name.clone(),
            national_id: record.national_id.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
        }
    }
}

/// Update payload: a whole-row patch sent to `addresses?id=eq.{id}`.
///
/// Same columns as the insert; the id travels in the row filter, never in
/// the body, so a patch cannot re-parent a row.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateAddressRequest(InsertAddressRequest);

impl From<&AddressRecord> for UpdateAddressRequest {
    fn from(record: &AddressRecord) -> Self {
        Self(InsertAddressRequest::from(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AddressRecord {
        AddressRecord {
            user_id: "user-1".to_string(),
            label: "Casa".to_string(),
            street: "Av. Providencia 1234".to_string(),
            city: "Santiago".to_string(),
            region: "RM".to_string(),
            country: PRIMARY_COUNTRY.to_string(),
            category: AddressCategory::Home,
            national_id: Some("12345678-5".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&AddressCategory::Concierge).unwrap(),
            "\"concierge\""
        );
        let cat: AddressCategory = serde_json::from_str("\"neighbor\"").unwrap();
        assert_eq!(cat, AddressCategory::Neighbor);
    }

    #[test]
    fn test_region_variant_from_record() {
        assert_eq!(
            Region::from_record("CL", "RM"),
            Region::Chile("RM".to_string())
        );
        assert_eq!(
            Region::from_record("AR", "Mendoza"),
            Region::Foreign("Mendoza".to_string())
        );
        assert_eq!(Region::Foreign("Mendoza".to_string()).as_str(), "Mendoza");
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_record().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_rut() {
        let mut record = sample_record();
        record.national_id = Some("12345678-9".to_string());
        assert_eq!(
            record.validate(),
            Err(ValidationError::InvalidRut("12345678-9".to_string()))
        );
    }

    #[test]
    fn test_validate_missing_rut_for_chile() {
        let mut record = sample_record();
        record.national_id = None;
        assert_eq!(record.validate(), Err(ValidationError::MissingRut));

        record.national_id = Some(String::new());
        assert_eq!(record.validate(), Err(ValidationError::MissingRut));
    }

    #[test]
    fn test_validate_unknown_region_for_chile() {
        let mut record = sample_record();
        record.region = "Mendoza".to_string();
        assert_eq!(
            record.validate(),
            Err(ValidationError::UnknownRegion("Mendoza".to_string()))
        );
    }

    #[test]
    fn test_validate_contact_fields_when_present() {
        let mut record = sample_record();
        record.email = Some("not-an-email".to_string());
        assert_eq!(
            record.validate(),
            Err(ValidationError::InvalidEmail("not-an-email".to_string()))
        );

        record.email = Some("maria@example.cl".to_string());
        record.phone = Some("call me".to_string());
        assert!(matches!(
            record.validate(),
            Err(ValidationError::InvalidPhone(_))
        ));

        record.phone = Some("+56 9 8765 4321".to_string());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_foreign_free_text() {
        let mut record = sample_record();
        record.country = "AR".to_string();
        record.region = "Mendoza".to_string();
        record.national_id = None;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_foreign_rut_still_checked_when_present() {
        let mut record = sample_record();
        record.country = "AR".to_string();
        record.region = "Mendoza".to_string();
        record.national_id = Some("12345678-9".to_string());
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "id": "addr-1",
            "user_id": "user-1",
            "label": "Casa",
            "street": "Av. Providencia 1234",
            "city": "Santiago",
            "region": "RM",
            "country": "CL",
            "is_default": true,
            "category": "home",
            "national_id": "12345678-5",
            "created_at": "2024-05-01T12:00:00Z"
        }"#;
        let record: AddressRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("addr-1"));
        assert!(record.is_default);
        assert_eq!(record.region(), Region::Chile("RM".to_string()));
    }

    #[test]
    fn test_insert_request_omits_server_columns() {
        let record = sample_record();
        let request = InsertAddressRequest::from(&record);
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["user_id"], "user-1");
        assert_eq!(json["category"], "home");
        // Unset optionals are omitted entirely
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_update_request_has_no_id() {
        let mut record = sample_record();
        record.id = Some("addr-1".to_string());
        let request = UpdateAddressRequest::from(&record);
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("id").is_none());
        assert_eq!(json["street"], "Av. Providencia 1234");
    }
}
