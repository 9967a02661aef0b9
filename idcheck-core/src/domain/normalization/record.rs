// idcheck-core/src/domain/normalization/record.rs

use crate::domain::normalization::{normalize_address, normalize_date, normalize_phone};
use crate::domain::record::{Field, FieldMapping, FieldValue, RecordSet};

/// Normalizes every document of a record set into a new record set.
///
/// Date of Birth and Phone Number are canonicalized (or replaced by the
/// `Unparseable` sentinel), Complete Address is split into components. Empty
/// or absent fields and every other field are copied as they are. Addresses
/// that are already structured are left alone.
pub fn normalize(records: &RecordSet) -> RecordSet {
    records
        .iter()
        .map(|(slot, fields)| (slot.clone(), normalize_fields(fields)))
        .collect()
}

fn normalize_fields(fields: &FieldMapping) -> FieldMapping {
    let mut normalized = fields.clone();

    if let Some(dob) = fields.text(Field::DateOfBirth) {
        normalized.insert(Field::DateOfBirth, canonical_or_sentinel(normalize_date(dob)));
    }
    if let Some(phone) = fields.text(Field::PhoneNumber) {
        normalized.insert(Field::PhoneNumber, canonical_or_sentinel(normalize_phone(phone)));
    }
    if let Some(address) = fields.text(Field::CompleteAddress) {
        normalized.insert(Field::CompleteAddress, normalize_address(address));
    }

    normalized
}

fn canonical_or_sentinel(value: Option<String>) -> FieldValue {
    value.map_or(FieldValue::Unparseable, FieldValue::Text)
}
