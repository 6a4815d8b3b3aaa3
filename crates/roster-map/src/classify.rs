//! Column classification.
//!
//! Header text takes precedence because it is unambiguous when present;
//! content voting is the fallback for exports with generic column names
//! like "Col3". Both are best-effort defaults the user can override.

use roster_model::{ColumnType, is_valid_email};
use tracing::debug;

use crate::patterns::{ROLE_TOKENS, header_keyword_type};

/// Non-empty samples examined per column.
const SAMPLE_LIMIT: usize = 10;

/// Infers the semantic type of one column from its header label and a
/// sample of its cell values.
#[must_use]
pub fn classify_column(header: &str, samples: &[String]) -> ColumnType {
    if let Some(column_type) = header_keyword_type(header) {
        debug!(header, %column_type, "classified by header keyword");
        return column_type;
    }
    let column_type = classify_by_content(samples);
    debug!(header, %column_type, "classified by content voting");
    column_type
}

/// Content-pattern voting over up to [`SAMPLE_LIMIT`] non-empty samples.
/// Each pattern needs at least 50% agreement; patterns are tried in
/// priority order so a column of emails never degrades to "name".
fn classify_by_content(samples: &[String]) -> ColumnType {
    let pool: Vec<&str> = samples
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .take(SAMPLE_LIMIT)
        .collect();
    if pool.is_empty() {
        return ColumnType::Skip;
    }

    let checks: [(ColumnType, fn(&str) -> bool); 4] = [
        (ColumnType::Email, looks_like_email_value),
        (ColumnType::Phone, looks_like_phone_value),
        (ColumnType::Role, looks_like_role_value),
        (ColumnType::Name, looks_like_name_value),
    ];
    for (column_type, check) in checks {
        let votes = pool.iter().filter(|value| check(value)).count();
        if votes * 2 >= pool.len() {
            return column_type;
        }
    }
    ColumnType::Skip
}

fn looks_like_email_value(value: &str) -> bool {
    value.contains('@') && is_valid_email(value)
}

/// Digit-only after stripping the usual separators, at least 7 digits.
fn looks_like_phone_value(value: &str) -> bool {
    let digits: String = value
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '(' | ')' | '.' | '+'))
        .collect();
    digits.len() >= 7 && digits.chars().all(|ch| ch.is_ascii_digit())
}

fn looks_like_role_value(value: &str) -> bool {
    let lowered = value.to_lowercase();
    ROLE_TOKENS.iter().any(|token| lowered.contains(token))
}

/// Letters, spaces, hyphens and apostrophes only, with at least one letter.
fn looks_like_name_value(value: &str) -> bool {
    value.chars().any(char::is_alphabetic)
        && value
            .chars()
            .all(|ch| ch.is_alphabetic() || matches!(ch, ' ' | '-' | '\''))
}
