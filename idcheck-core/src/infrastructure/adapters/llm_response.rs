// idcheck-core/src/infrastructure/adapters/llm_response.rs

use crate::domain::record::{FieldMapping, FieldValue};
use crate::infrastructure::error::InfrastructureError;
use serde_json::Value;

/// Removes a surrounding Markdown code fence (```json ... ```), if any.
fn strip_code_fence(raw: &str) -> &str {
    let mut body = raw.trim();
    if let Some(rest) = body.strip_prefix("```") {
        // Drop the info string ("json") up to the end of the opening line.
        body = rest
            .split_once('\n')
            .map_or_else(|| rest.trim_start_matches("json"), |(_, tail)| tail);
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

/// Turns a language-model answer into a field mapping.
///
/// An empty answer is an empty mapping. Anything that is not a single JSON
/// object is an error; callers decide whether to degrade it to empty.
pub fn parse_llm_response(raw: &str) -> Result<FieldMapping, InfrastructureError> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Ok(FieldMapping::new());
    }

    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| (key, FieldValue::from_json(value)))
            .collect()),
        other => Err(InfrastructureError::ExtractionError(format!(
            "expected a JSON object, got: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{AddressComponents, Field};
    use anyhow::Result;

    #[test]
    fn test_plain_json() -> Result<()> {
        let fields = parse_llm_response(r#"{"Full Name": "John Doe", "PAN Number": "ABCDE1234F"}"#)?;
        assert_eq!(fields.text(Field::FullName), Some("John Doe"));
        assert_eq!(fields.len(), 2);
        Ok(())
    }

    #[test]
    fn test_fenced_json() -> Result<()> {
        let raw = "```json\n{\"Date of Birth\": \"05-06-1990\"}\n```\n";
        let fields = parse_llm_response(raw)?;
        assert_eq!(fields.text(Field::DateOfBirth), Some("05-06-1990"));
        Ok(())
    }

    #[test]
    fn test_empty_answers() -> Result<()> {
        assert!(parse_llm_response("")?.is_empty());
        assert!(parse_llm_response("```json\n```")?.is_empty());
        assert!(parse_llm_response("{}")?.is_empty());
        assert!(!parse_llm_response("```json{\"Full Name\": \"A\"}```")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_value_coercion() -> Result<()> {
        let raw = r#"{"Aadhaar Number": 123456789012, "Phone Number": null, "Complete Address": {"city": "Pune"}}"#;
        let fields = parse_llm_response(raw)?;
        assert_eq!(fields.text(Field::AadhaarNumber), Some("123456789012"));
        assert_eq!(fields.get(Field::PhoneNumber), Some(&FieldValue::Unparseable));
        assert_eq!(
            fields.get(Field::CompleteAddress),
            Some(&FieldValue::Address(AddressComponents {
                city: "Pune".into(),
                ..Default::default()
            }))
        );
        Ok(())
    }

    #[test]
    fn test_invalid_answers() {
        assert!(matches!(
            parse_llm_response("Sorry, I cannot help with that."),
            Err(InfrastructureError::JsonError(_))
        ));
        assert!(matches!(
            parse_llm_response("[1, 2, 3]"),
            Err(InfrastructureError::ExtractionError(_))
        ));
    }
}
