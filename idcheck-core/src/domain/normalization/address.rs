// idcheck-core/src/domain/normalization/address.rs
//
// Known-weak heuristic: tokens are classified left to right by shape alone.
// The address rule depends on its exact (mis)classifications, so the
// precedence below must stay stable.

use crate::domain::record::AddressComponents;

/// Shortest token (not starting with a digit) counted as a place word.
const PLACE_WORD_MIN_LEN: usize = 6;

#[derive(Debug, PartialEq, Eq)]
enum Token {
    HouseNumber,
    Pincode,
    PlaceWord,
    Noise,
}

fn classify(token: &str) -> Token {
    let all_digits = token.chars().all(|c| c.is_ascii_digit());
    let len = token.chars().count();

    if all_digits && (1..=4).contains(&len) {
        Token::HouseNumber
    } else if all_digits && len == 6 {
        Token::Pincode
    } else if len >= PLACE_WORD_MIN_LEN && !token.starts_with(|c: char| c.is_ascii_digit()) {
        Token::PlaceWord
    } else {
        Token::Noise
    }
}

/// Splits a free-text address into house number, street, city, state and pincode.
///
/// - the first 1–4 digit token is the house number; later ones are dropped
/// - a 6-digit token is the pincode (the last one wins)
/// - words of 6 characters or more fill city, then state, then are appended
///   to street
/// - everything else is dropped
pub fn normalize_address(input: &str) -> AddressComponents {
    let mut components = AddressComponents::default();

    let tokens = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    for token in tokens {
        match classify(token) {
            Token::HouseNumber => {
                if components.house_number.is_empty() {
                    components.house_number = token.to_string();
                }
            }
            Token::Pincode => components.pincode = token.to_string(),
            Token::PlaceWord => {
                if components.city.is_empty() {
                    components.city = token.to_string();
                } else if components.state.is_empty() {
                    components.state = token.to_string();
                } else {
                    if !components.street.is_empty() {
                        components.street.push(' ');
                    }
                    components.street.push_str(token);
                }
            }
            Token::Noise => {}
        }
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_word_length_boundary() {
        assert_eq!(classify("Delhi"), Token::Noise);
        assert_eq!(classify("Mumbai"), Token::PlaceWord);

        let address = normalize_address("Delhi Mumbai");
        assert_eq!(address.city, "Mumbai");
        assert!(address.state.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_address(""), AddressComponents::default());
        assert_eq!(normalize_address("  ,  "), AddressComponents::default());
    }

    #[test]
    fn test_typical_address() {
        let a = normalize_address("12, Gandhi Nagar, Bangalore, Karnataka, 560001");
        assert_eq!(a.house_number, "12");
        assert_eq!(a.pincode, "560001");
        // "Gandhi" is the first long word, so it lands in city.
        assert_eq!(a.city, "Gandhi");
        assert_eq!(a.state, "Bangalore");
        assert_eq!(a.street, "Karnataka");
    }

    #[test]
    fn test_street_accumulates_in_order() {
        let a = normalize_address("Flat 7 Sunshine Apartments Andheri Mumbai Maharashtra 400053");
        assert_eq!(a.house_number, "7");
        assert_eq!(a.city, "Sunshine");
        assert_eq!(a.state, "Apartments");
        assert_eq!(a.street, "Andheri Mumbai Maharashtra");
        assert_eq!(a.pincode, "400053");
    }

    #[test]
    fn test_only_first_house_number_is_kept() {
        let a = normalize_address("221 B Baker 12 Street");
        assert_eq!(a.house_number, "221");
        assert_eq!(a.city, "Street");
    }

    #[test]
    fn test_noise_tokens_are_dropped() {
        // 5-digit and 7-digit numbers, short words, and digit-led words match nothing.
        let a = normalize_address("No. 12345 MG Rd 1234567 4th-Cross");
        assert_eq!(a, AddressComponents::default());
    }

    #[test]
    fn test_commas_without_spaces() {
        let a = normalize_address("45,Lakeview,Chennai,600001");
        assert_eq!(a.house_number, "45");
        assert_eq!(a.city, "Lakeview");
        assert_eq!(a.state, "Chennai");
        assert_eq!(a.pincode, "600001");
    }
}
