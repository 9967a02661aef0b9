// idcheck-core/src/domain/record/value.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Structured form of "Complete Address". Components are independent of each
/// other: nothing ties a pincode to a city.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressComponents {
    pub house_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl AddressComponents {
    pub fn is_empty(&self) -> bool {
        self.house_number.is_empty()
            && self.street.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.pincode.is_empty()
    }

    /// Looks a component up by its serialized key.
    pub fn component(&self, key: &str) -> Option<&str> {
        match key {
            "house_number" => Some(&self.house_number),
            "street" => Some(&self.street),
            "city" => Some(&self.city),
            "state" => Some(&self.state),
            "pincode" => Some(&self.pincode),
            _ => None,
        }
    }
}

/// A single extracted field.
///
/// `Unparseable` is the sentinel written by the normalizers when a value
/// cannot be interpreted; it serializes as `null` and is never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Address(AddressComponents),
    Unparseable,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&AddressComponents> {
        match self {
            Self::Address(a) => Some(a),
            _ => None,
        }
    }

    /// Whether the value takes part in comparisons. Empty text counts as absent.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Address(_) => true,
            Self::Unparseable => false,
        }
    }

    /// Coerces an arbitrary JSON value coming out of an extractor.
    ///
    /// Scalars become text, `null` and arrays become `Unparseable`, objects
    /// are read as address components (malformed ones collapse to empty
    /// components).
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Number(n) => Self::Text(n.to_string()),
            Value::Bool(b) => Self::Text(b.to_string()),
            Value::Null | Value::Array(_) => Self::Unparseable,
            obj @ Value::Object(_) => {
                Self::Address(serde_json::from_value(obj).unwrap_or_default())
            }
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(FieldValue::from_json)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<AddressComponents> for FieldValue {
    fn from(value: AddressComponents) -> Self {
        Self::Address(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_json_coercion() {
        assert_eq!(FieldValue::from_json(json!("abc")), FieldValue::text("abc"));
        assert_eq!(
            FieldValue::from_json(json!(123456789012_u64)),
            FieldValue::text("123456789012")
        );
        assert_eq!(FieldValue::from_json(json!(null)), FieldValue::Unparseable);
        assert_eq!(FieldValue::from_json(json!(["a"])), FieldValue::Unparseable);
    }

    #[test]
    fn test_malformed_address_object_collapses_to_empty() {
        let value = FieldValue::from_json(json!({"city": 42, "pincode": "560001"}));
        assert_eq!(value, FieldValue::Address(AddressComponents::default()));
    }

    #[test]
    fn test_partial_address_object_keeps_known_keys() {
        let value = FieldValue::from_json(json!({"city": "Mumbai", "landmark": "Near park"}));
        let address = value.as_address().cloned().unwrap_or_default();
        assert_eq!(address.city, "Mumbai");
        assert!(address.pincode.is_empty());
    }

    #[test]
    fn test_unparseable_serializes_as_null() -> Result<()> {
        assert_eq!(serde_json::to_string(&FieldValue::Unparseable)?, "null");
        assert_eq!(serde_json::to_string(&FieldValue::text("x"))?, "\"x\"");
        Ok(())
    }

    #[test]
    fn test_presence() {
        assert!(!FieldValue::text("").is_present());
        assert!(!FieldValue::Unparseable.is_present());
        assert!(FieldValue::Address(AddressComponents::default()).is_present());
    }
}
