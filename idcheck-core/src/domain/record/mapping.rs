// idcheck-core/src/domain/record/mapping.rs

use crate::domain::error::DomainError;
use crate::domain::record::field::Field;
use crate::domain::record::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slot name of the `index`-th (0-based) submitted document: `document_1`, ...
pub fn document_slot(index: usize) -> String {
    format!("document_{}", index + 1)
}

/// Field label -> value for one document.
///
/// Keys outside the known vocabulary are kept verbatim so that nothing an
/// extractor returns is lost. Absence is distinct from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping(BTreeMap<String, FieldValue>);

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.0.get(field.as_str())
    }

    pub fn get_key(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Non-empty text value of `field`, if any.
    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field)
            .and_then(FieldValue::as_text)
            .filter(|s| !s.is_empty())
    }

    pub fn insert(&mut self, field: Field, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.0.insert(field.as_str().to_string(), value.into())
    }

    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// All documents submitted together for one person, keyed by slot.
///
/// Key order is irrelevant to verification; a `BTreeMap` keeps reports
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet(BTreeMap<String, FieldMapping>);

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a record set from its JSON form.
    pub fn from_json_str(content: &str) -> Result<Self, DomainError> {
        serde_json::from_str(content).map_err(|e| DomainError::RecordSetError(e.to_string()))
    }

    pub fn insert(&mut self, slot: impl Into<String>, fields: FieldMapping) -> Option<FieldMapping> {
        self.0.insert(slot.into(), fields)
    }

    pub fn with(mut self, slot: impl Into<String>, fields: FieldMapping) -> Self {
        self.insert(slot, fields);
        self
    }

    pub fn get(&self, slot: &str) -> Option<&FieldMapping> {
        self.0.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldMapping)> {
        self.0.iter()
    }

    pub fn documents(&self) -> impl Iterator<Item = &FieldMapping> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, FieldMapping)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (String, FieldMapping)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_document_slot_is_one_based() {
        assert_eq!(document_slot(0), "document_1");
        assert_eq!(document_slot(2), "document_3");
    }

    #[test]
    fn test_text_ignores_empty_and_sentinel() {
        let fields = FieldMapping::new()
            .with(Field::FullName, "")
            .with(Field::DateOfBirth, FieldValue::Unparseable)
            .with(Field::PanNumber, "ABCDE1234F");

        assert_eq!(fields.text(Field::FullName), None);
        assert_eq!(fields.text(Field::DateOfBirth), None);
        assert_eq!(fields.text(Field::PanNumber), Some("ABCDE1234F"));
        assert!(fields.get(Field::FullName).is_some());
    }

    #[test]
    fn test_record_set_json_keeps_unknown_keys() -> Result<()> {
        let records = RecordSet::from_json_str(
            r#"{"document_1": {"Full Name": "John Doe", "Blood Group": "O+"}, "document_2": {}}"#,
        )?;
        assert_eq!(records.len(), 2);
        let first = records.get("document_1").cloned().unwrap_or_default();
        assert_eq!(first.text(Field::FullName), Some("John Doe"));
        assert_eq!(first.get_key("Blood Group"), Some(&FieldValue::text("O+")));
        Ok(())
    }

    #[test]
    fn test_record_set_rejects_non_object() {
        let err = RecordSet::from_json_str("[1, 2]");
        assert!(matches!(err, Err(DomainError::RecordSetError(_))));
    }
}
