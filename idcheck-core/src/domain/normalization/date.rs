// idcheck-core/src/domain/normalization/date.rs

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Output layout of every normalized date.
pub const CANONICAL_DATE_FORMAT: &str = "%d-%m-%Y";

/// Two-digit years below this pivot belong to the 2000s, the rest to the 1900s.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

enum Parser {
    /// `shape` guards the input before chrono sees it, so that `%Y` only ever
    /// receives exactly four digits.
    Chrono {
        shape: &'static str,
        format: &'static str,
    },
    /// DD-MM-YY, expanded with [`TWO_DIGIT_YEAR_PIVOT`].
    TwoDigitYear { shape: &'static str },
}

// Tried in order, first match wins.
const PARSERS: [Parser; 7] = [
    Parser::Chrono {
        shape: r"^\d{1,2}-\d{1,2}-\d{4}$",
        format: "%d-%m-%Y",
    },
    Parser::Chrono {
        shape: r"^\d{1,2}/\d{1,2}/\d{4}$",
        format: "%d/%m/%Y",
    },
    Parser::Chrono {
        shape: r"^\d{1,2} [A-Za-z]{3} \d{4}$",
        format: "%d %b %Y",
    },
    Parser::Chrono {
        shape: r"^\d{1,2} [A-Za-z]+ \d{4}$",
        format: "%d %B %Y",
    },
    Parser::Chrono {
        shape: r"^\d{4}-\d{1,2}-\d{1,2}$",
        format: "%Y-%m-%d",
    },
    Parser::TwoDigitYear {
        shape: r"^(\d{1,2})-(\d{1,2})-(\d{2})$",
    },
    Parser::Chrono {
        shape: r"^\d{1,2} [A-Za-z]+, \d{4}$",
        format: "%d %B, %Y",
    },
];

fn compiled_shapes() -> &'static [Regex] {
    static SHAPES: OnceLock<Vec<Regex>> = OnceLock::new();
    SHAPES.get_or_init(|| {
        PARSERS
            .iter()
            .map(|parser| {
                let shape = match parser {
                    Parser::Chrono { shape, .. } | Parser::TwoDigitYear { shape } => shape,
                };
                // Patterns are hardcoded; an impossible fallback keeps Clippy quiet.
                Regex::new(shape).unwrap_or_else(|_| {
                    Regex::new("$^").unwrap_or_else(|_| unreachable!())
                })
            })
            .collect()
    })
}

/// Parses `input` against the supported layouts and returns it as `DD-MM-YYYY`.
///
/// Returns `None` when no layout matches or the calendar date does not exist.
/// Idempotent: a canonical date is returned unchanged.
pub fn normalize_date(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    PARSERS
        .iter()
        .zip(compiled_shapes())
        .filter(|(_, shape)| shape.is_match(input))
        .find_map(|(parser, shape)| match parser {
            Parser::Chrono { format, .. } => NaiveDate::parse_from_str(input, format).ok(),
            Parser::TwoDigitYear { .. } => parse_two_digit_year(shape, input),
        })
        .map(|date| date.format(CANONICAL_DATE_FORMAT).to_string())
}

fn parse_two_digit_year(shape: &Regex, input: &str) -> Option<NaiveDate> {
    let caps = shape.captures(input)?;
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let yy: i32 = caps.get(3)?.as_str().parse().ok()?;
    let year = if yy < TWO_DIGIT_YEAR_PIVOT {
        2000 + yy
    } else {
        1900 + yy
    };
    NaiveDate::from_ymd_opt(year, month, day)
}
