// idcheck-core/src/domain/extraction/preprocess.rs

/// Characters kept besides alphanumerics, `_` and whitespace.
const KEPT_PUNCTUATION: [char; 5] = [',', '.', '-', '/', '@'];

/// Repairs common OCR confusions and strips noise before entity extraction.
///
/// `O`, `l` and `S` sitting between two digits become `0`, `1` and `5`; an `l`
/// right after a non-digit and before a digit becomes `1`. Whitespace runs
/// collapse to one space and unexpected symbols are removed.
pub fn preprocess_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut text = replace_between_digits(text, 'O', '0');
    text = replace_between_digits(&text, 'l', '1');
    text = replace_between_digits(&text, 'S', '5');
    text = replace_before_digit(&text, 'l', '1');

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed
        .chars()
        .filter(|&c| {
            c.is_alphanumeric() || c == '_' || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c)
        })
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_digit(c: Option<&char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit())
}

/// Lookaround is evaluated against the input, not the partially rewritten output.
fn replace_between_digits(text: &str, from: char, to: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let prev = i.checked_sub(1).and_then(|p| chars.get(p));
            if c == from && is_digit(prev) && is_digit(chars.get(i + 1)) {
                to
            } else {
                c
            }
        })
        .collect()
}

fn replace_before_digit(text: &str, from: char, to: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let prev = i.checked_sub(1).and_then(|p| chars.get(p));
            let after_non_digit = prev.is_some_and(|p| !p.is_ascii_digit());
            if c == from && after_non_digit && is_digit(chars.get(i + 1)) {
                to
            } else {
                c
            }
        })
        .collect()
}
