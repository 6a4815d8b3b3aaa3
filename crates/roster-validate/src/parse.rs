//! Row parsing and validation.
//!
//! Validation problems are returned as data inside each row, never as
//! errors: a bad phone or email is an expected, displayed condition.

use tracing::debug;

use roster_model::{ColumnMapping, ColumnType, ParsedRow, Role, is_valid_email};
use roster_phone::normalize;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PHONE_INVALID: &str = "Invalid phone format";
pub const PHONE_US_LENGTH: &str = "US phone must be 10 digits";

/// Parses every data row against the current column mapping and assumed
/// dial code.
///
/// Deterministic: identical inputs produce identical output, so callers
/// may re-run this wholesale whenever the mapping or assumption changes.
#[must_use]
pub fn parse_rows(
    rows: &[Vec<String>],
    mapping: &ColumnMapping,
    assumed_dial: Option<&str>,
) -> Vec<ParsedRow> {
    let parsed: Vec<ParsedRow> = rows
        .iter()
        .map(|row| parse_row(row, mapping, assumed_dial))
        .collect();
    let invalid = parsed.iter().filter(|row| !row.is_invitable()).count();
    debug!(
        rows = parsed.len(),
        invalid,
        assumed_dial = assumed_dial.unwrap_or(""),
        "parsed rows"
    );
    parsed
}

/// Parses a single row. Unmapped fields come out empty.
#[must_use]
pub fn parse_row(
    row: &[String],
    mapping: &ColumnMapping,
    assumed_dial: Option<&str>,
) -> ParsedRow {
    let cell = |column_type: ColumnType| -> &str {
        mapping
            .column_for(column_type)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    };

    let mut errors = Vec::new();

    let email = cell(ColumnType::Email).trim().to_lowercase();
    if let Some(error) = email_error(&email) {
        errors.push(error.to_string());
    }

    let raw_phone = cell(ColumnType::Phone).trim().to_string();
    let (phone, phone_assumed) = validate_phone(&raw_phone, assumed_dial, &mut errors);

    let name = cell(ColumnType::Name).trim().to_string();
    let role = Role::parse(cell(ColumnType::Role));

    ParsedRow {
        email,
        name,
        phone,
        raw_phone,
        phone_assumed,
        role,
        errors,
    }
}

/// Email validation shared with the edit path.
pub(crate) fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

/// Normalizes and validates a phone cell, pushing any error message.
///
/// Returns the normalized value (empty when absent or invalid) and
/// whether the dial code was assumed. An empty cell is valid: the phone
/// is optional.
pub(crate) fn validate_phone(
    raw_phone: &str,
    assumed_dial: Option<&str>,
    errors: &mut Vec<String>,
) -> (String, bool) {
    if raw_phone.is_empty() {
        return (String::new(), false);
    }
    let Some(normalized) = normalize(raw_phone, assumed_dial) else {
        errors.push(PHONE_INVALID.to_string());
        return (String::new(), false);
    };
    if let Some(error) = us_length_error(&normalized.value, normalized.assumed, assumed_dial) {
        errors.push(error.to_string());
        return (String::new(), false);
    }
    (normalized.value, normalized.assumed)
}

/// NANP rule: when the dial code was assumed to be `+1`, the national
/// number must be exactly 10 digits. A value that arrived with its own
/// explicit `+1` is not length-checked; the asymmetry is intentional and
/// kept in this one place pending product clarification.
fn us_length_error(
    value: &str,
    assumed: bool,
    assumed_dial: Option<&str>,
) -> Option<&'static str> {
    if !assumed || assumed_dial != Some("+1") {
        return None;
    }
    let national = value.strip_prefix("+1").unwrap_or("");
    (national.len() != 10).then_some(PHONE_US_LENGTH)
}
