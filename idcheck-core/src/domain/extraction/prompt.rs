// idcheck-core/src/domain/extraction/prompt.rs

use crate::domain::record::Field;

/// Employment letters carry the employer's switchboard, never the person's phone.
pub const EMPLOYMENT_LETTER: &str = "employment_letter";

/// Fields requested from the entity extractor for a document type.
pub fn requested_fields(doc_type: &str) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|f| !(doc_type == EMPLOYMENT_LETTER && *f == Field::PhoneNumber))
        .collect()
}

fn format_hint(field: Field) -> &'static str {
    match field {
        Field::DateOfBirth => " (DD-MM-YYYY)",
        Field::CompleteAddress => " (house number, street, city, state, pincode)",
        Field::PhoneNumber => {
            " (+91XXXXXXXXXX) [Extract only the individual's personal phone number, ignoring organizational contacts]"
        }
        Field::PanNumber => " (5 letters + 4 digits + 1 letter)",
        _ => "",
    }
}

/// Builds the instruction sent to the entity extractor along with the
/// pre-processed document text.
pub fn build_prompt(text: &str, doc_type: &str) -> String {
    let mut prompt = format!(
        "Extract the following fields from this {doc_type} text, handling OCR errors (e.g., o↔0, l↔1, S↔5) and normalizing formats:\n"
    );
    for field in requested_fields(doc_type) {
        prompt.push_str(&format!("- {}{}\n", field.as_str(), format_hint(field)));
    }
    prompt.push_str(
        "Return a valid JSON object with only present fields, e.g., {\"Full Name\": \"John Doe\"}. If no data is found, return {}.\n",
    );
    prompt.push_str(&format!("Text: {text}"));
    prompt
}
