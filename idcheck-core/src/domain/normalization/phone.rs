// idcheck-core/src/domain/normalization/phone.rs

/// Country prefix applied to bare 10-digit numbers.
pub const COUNTRY_PREFIX: &str = "+91";

/// Canonicalizes an Indian mobile number to `+91XXXXXXXXXX`.
///
/// Every non-digit is dropped. Exactly 10 digits get the `+91` prefix; longer
/// digit strings already starting with `91` get a bare `+`. Anything else is
/// unparseable. Only length is checked, not number plausibility.
pub fn normalize_phone(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        10 => Some(format!("{COUNTRY_PREFIX}{digits}")),
        n if n > 10 && digits.starts_with("91") => Some(format!("+{digits}")),
        _ => None,
    }
}
