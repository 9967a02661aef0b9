// idcheck-core/src/domain/verification/rules.rs
//
// Every rule is total: absent or unparseable inputs shrink the comparison set,
// and an empty comparison set is a PASS.

use crate::domain::record::{AddressComponents, Field, FieldMapping, FieldValue};
use crate::domain::verification::outcome::RuleResult;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Address components compared across documents. Street and state are too
/// noisy after tokenization to take part.
pub const CORE_ADDRESS_KEYS: [&str; 3] = ["house_number", "city", "pincode"];

pub const AADHAAR_DIGITS: usize = 12;

pub type RuleCheck = fn(&[&FieldMapping]) -> RuleResult;

pub struct Rule {
    pub name: &'static str,
    pub description: &'static str,
    pub check: RuleCheck,
}

/// Evaluated in this order, never short-circuited.
pub const RULES: [Rule; 7] = [
    Rule {
        name: "name_match",
        description: "Full Name is identical across documents (case and whitespace insensitive)",
        check: name_match,
    },
    Rule {
        name: "dob_match",
        description: "Date of Birth is identical across documents",
        check: dob_match,
    },
    Rule {
        name: "address_match",
        description: "House number, city and pincode agree across documents",
        check: address_match,
    },
    Rule {
        name: "phone_match",
        description: "Phone Number (last 10 digits) is identical across documents",
        check: phone_match,
    },
    Rule {
        name: "father_name_match",
        description: "Father's Name is identical across documents (case and whitespace insensitive)",
        check: father_name_match,
    },
    Rule {
        name: "pan_format",
        description: "Every PAN Number has the shape AAAAA9999A",
        check: pan_format,
    },
    Rule {
        name: "aadhaar_format",
        description: "Every Aadhaar Number has exactly 12 digits",
        check: aadhaar_format,
    },
];

/// Human-readable description of the rule registered as `name`.
pub fn describe(name: &str) -> Option<&'static str> {
    RULES.iter().find(|r| r.name == name).map(|r| r.description)
}

fn pan_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$")
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

// --- HELPERS ---

fn present_texts<'a>(documents: &[&'a FieldMapping], field: Field) -> Vec<&'a str> {
    documents.iter().filter_map(|d| d.text(field)).collect()
}

/// Lower-cases and removes every whitespace character.
fn squash(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn all_equal<T: Ord>(values: impl IntoIterator<Item = T>) -> bool {
    values.into_iter().collect::<BTreeSet<_>>().len() <= 1
}

// --- RULES ---

pub fn name_match(documents: &[&FieldMapping]) -> RuleResult {
    let names = present_texts(documents, Field::FullName);
    RuleResult::from_check(all_equal(names.iter().map(|n| squash(n))))
}

pub fn dob_match(documents: &[&FieldMapping]) -> RuleResult {
    let dobs = present_texts(documents, Field::DateOfBirth);
    if dobs.is_empty() {
        return RuleResult::pass().with_reason("No DOB present");
    }
    if all_equal(dobs.iter()) {
        return RuleResult::pass();
    }
    RuleResult::fail()
        .with_reason(format!("DOBs differed: {:?}", dobs))
        .with_values(dobs.iter().map(|d| d.to_string()).collect())
}

pub fn address_match(documents: &[&FieldMapping]) -> RuleResult {
    let addresses: Vec<AddressComponents> = documents
        .iter()
        .filter_map(|d| d.get(Field::CompleteAddress))
        .filter(|v| v.is_present())
        .map(|v| match v {
            FieldValue::Address(a) => a.clone(),
            // Unstructured leftovers cannot be compared.
            _ => AddressComponents::default(),
        })
        .collect();

    if addresses.is_empty() {
        return RuleResult::pass().with_reason("No addresses to compare");
    }

    let consistent = CORE_ADDRESS_KEYS.iter().all(|key| {
        all_equal(
            addresses
                .iter()
                .filter_map(|a| a.component(key))
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty()),
        )
    });
    RuleResult::from_check(consistent)
}

pub fn phone_match(documents: &[&FieldMapping]) -> RuleResult {
    let phones: Vec<String> = present_texts(documents, Field::PhoneNumber)
        .into_iter()
        .map(|p| {
            let d = digits(p);
            let start = d.len().saturating_sub(10);
            d[start..].to_string()
        })
        .collect();

    if phones.is_empty() {
        return RuleResult::pass().with_reason("No phone to compare");
    }
    if all_equal(phones.iter()) {
        return RuleResult::pass();
    }
    RuleResult::fail()
        .with_reason(format!("Phones differ: {:?}", phones))
        .with_values(phones)
}

pub fn father_name_match(documents: &[&FieldMapping]) -> RuleResult {
    let fathers = present_texts(documents, Field::FathersName);
    RuleResult::from_check(all_equal(fathers.iter().map(|f| squash(f))))
}

pub fn pan_format(documents: &[&FieldMapping]) -> RuleResult {
    let pans: Vec<String> = present_texts(documents, Field::PanNumber)
        .into_iter()
        .map(|p| p.trim().to_uppercase())
        .collect();

    if pans.is_empty() {
        return RuleResult::pass().with_reason("No PAN present");
    }
    let valid = pans.iter().all(|p| pan_regex().is_match(p));
    RuleResult::from_check(valid).with_values(pans)
}

pub fn aadhaar_format(documents: &[&FieldMapping]) -> RuleResult {
    let aadhaars: Vec<String> = present_texts(documents, Field::AadhaarNumber)
        .into_iter()
        .map(digits)
        .collect();

    if aadhaars.is_empty() {
        return RuleResult::pass().with_reason("No Aadhaar present");
    }
    let valid = aadhaars.iter().all(|a| a.len() == AADHAAR_DIGITS);
    RuleResult::from_check(valid).with_values(aadhaars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::verification::outcome::RuleStatus;

    #[test]
    fn test_describe_registered_rules() {
        assert_eq!(
            describe("pan_format"),
            Some("Every PAN Number has the shape AAAAA9999A")
        );
        assert!(RULES.iter().all(|r| describe(r.name).is_some()));
        assert_eq!(describe("rule_8"), None);
    }

    fn docs(field: Field, values: &[&str]) -> Vec<FieldMapping> {
        values
            .iter()
            .map(|v| FieldMapping::new().with(field, *v))
            .collect()
    }

    fn run(check: RuleCheck, documents: &[FieldMapping]) -> RuleResult {
        let refs: Vec<&FieldMapping> = documents.iter().collect();
        check(&refs)
    }

    #[test]
    fn test_rule_names_are_unique() {
        let names: BTreeSet<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn test_every_rule_passes_on_empty_input() {
        for rule in &RULES {
            assert!((rule.check)(&[]).is_pass(), "rule: {}", rule.name);
            let blank = FieldMapping::new();
            assert!((rule.check)(&[&blank, &blank]).is_pass(), "rule: {}", rule.name);
        }
    }

    #[test]
    fn test_name_match_ignores_case_and_spacing() {
        let result = run(name_match, &docs(Field::FullName, &["John Doe", "john  doe", " JOHNDOE "]));
        assert_eq!(result, RuleResult::pass());

        let result = run(name_match, &docs(Field::FullName, &["John Doe", "Jane Doe"]));
        assert_eq!(result, RuleResult::fail());
    }

    #[test]
    fn test_name_match_skips_empty_names() {
        let result = run(name_match, &docs(Field::FullName, &["John Doe", ""]));
        assert!(result.is_pass());
    }

    #[test]
    fn test_dob_match() {
        let vacuous = run(dob_match, &[FieldMapping::new()]);
        assert!(vacuous.is_pass());
        assert_eq!(vacuous.reason.as_deref(), Some("No DOB present"));

        let same = run(dob_match, &docs(Field::DateOfBirth, &["05-06-1990", "05-06-1990"]));
        assert_eq!(same, RuleResult::pass());

        let differ = run(dob_match, &docs(Field::DateOfBirth, &["05-06-1990", "06-05-1990"]));
        assert_eq!(differ.status, RuleStatus::Fail);
        assert_eq!(
            differ.values,
            Some(vec!["05-06-1990".to_string(), "06-05-1990".to_string()])
        );
        assert!(differ.reason.unwrap_or_default().starts_with("DOBs differed"));
    }

    #[test]
    fn test_dob_match_ignores_unparseable() {
        let documents = vec![
            FieldMapping::new().with(Field::DateOfBirth, "05-06-1990"),
            FieldMapping::new().with(Field::DateOfBirth, FieldValue::Unparseable),
        ];
        assert_eq!(run(dob_match, &documents), RuleResult::pass());
    }

    fn address(house: &str, city: &str, pincode: &str, street: &str) -> FieldMapping {
        FieldMapping::new().with(
            Field::CompleteAddress,
            AddressComponents {
                house_number: house.into(),
                street: street.into(),
                city: city.into(),
                state: String::new(),
                pincode: pincode.into(),
            },
        )
    }

    #[test]
    fn test_address_match_compares_core_keys_only() {
        let documents = vec![
            address("12", "Bangalore", "560001", "MG Road"),
            address("12", "BANGALORE ", "560001", "Brigade Road"),
        ];
        assert_eq!(run(address_match, &documents), RuleResult::pass());
    }

    #[test]
    fn test_address_match_ignores_empty_components() {
        let documents = vec![
            address("12", "", "560001", ""),
            address("", "Bangalore", "", ""),
        ];
        assert!(run(address_match, &documents).is_pass());
    }

    #[test]
    fn test_address_match_fails_on_pincode_conflict() {
        let documents = vec![
            address("12", "Bangalore", "560001", ""),
            address("12", "Bangalore", "560002", ""),
        ];
        assert_eq!(run(address_match, &documents), RuleResult::fail());
    }

    #[test]
    fn test_address_match_coerces_unstructured_values() {
        let documents = vec![
            address("12", "Bangalore", "560001", ""),
            FieldMapping::new().with(Field::CompleteAddress, "not tokenized"),
        ];
        let result = run(address_match, &documents);
        assert!(result.is_pass());
        assert_eq!(result.reason, None);

        let vacuous = run(address_match, &[FieldMapping::new()]);
        assert_eq!(vacuous.reason.as_deref(), Some("No addresses to compare"));
    }

    #[test]
    fn test_phone_match_uses_last_ten_digits() {
        let result = run(phone_match, &docs(Field::PhoneNumber, &["+919876543210", "9876543210"]));
        assert_eq!(result, RuleResult::pass());

        let result = run(phone_match, &docs(Field::PhoneNumber, &["+919876543210", "+919876543211"]));
        assert!(result.is_fail());
        assert_eq!(
            result.values,
            Some(vec!["9876543210".to_string(), "9876543211".to_string()])
        );
    }

    #[test]
    fn test_phone_match_vacuous_reason() {
        let documents = vec![FieldMapping::new().with(Field::PhoneNumber, FieldValue::Unparseable)];
        let result = run(phone_match, &documents);
        assert!(result.is_pass());
        assert_eq!(result.reason.as_deref(), Some("No phone to compare"));
    }

    #[test]
    fn test_father_name_match() {
        let result = run(father_name_match, &docs(Field::FathersName, &["Ram Kumar", "RAM KUMAR"]));
        assert!(result.is_pass());
        let result = run(father_name_match, &docs(Field::FathersName, &["Ram Kumar", "Shyam Kumar"]));
        assert!(result.is_fail());
    }

    #[test]
    fn test_pan_format() {
        let result = run(pan_format, &docs(Field::PanNumber, &["abcde1234f"]));
        assert!(result.is_pass());
        assert_eq!(result.values, Some(vec!["ABCDE1234F".to_string()]));

        let result = run(pan_format, &docs(Field::PanNumber, &["ABCDE1234F", "ABC1234XYZ"]));
        assert!(result.is_fail());
        assert_eq!(
            result.values,
            Some(vec!["ABCDE1234F".to_string(), "ABC1234XYZ".to_string()])
        );

        let vacuous = run(pan_format, &[]);
        assert_eq!(vacuous.reason.as_deref(), Some("No PAN present"));
    }

    #[test]
    fn test_aadhaar_format() {
        let result = run(aadhaar_format, &docs(Field::AadhaarNumber, &["1234 5678 9012"]));
        assert!(result.is_pass());
        assert_eq!(result.values, Some(vec!["123456789012".to_string()]));

        let result = run(
            aadhaar_format,
            &docs(Field::AadhaarNumber, &["1234 5678 9012", "123456789"]),
        );
        assert!(result.is_fail());
        assert_eq!(
            result.values,
            Some(vec!["123456789012".to_string(), "123456789".to_string()])
        );

        let vacuous = run(aadhaar_format, &[]);
        assert_eq!(vacuous.reason.as_deref(), Some("No Aadhaar present"));
    }
}
