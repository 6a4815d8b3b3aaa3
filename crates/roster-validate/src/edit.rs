//! Scoped single-field re-validation.
//!
//! Editing one field re-runs validation for that field only: errors
//! mentioning the edited field are cleared and re-derived, everything
//! else in the row is left untouched. This filtering contract determines
//! what the user sees as "still broken" after a fix, so it is exact.

use roster_model::{ParsedRow, Role};

use crate::parse::{email_error, validate_phone};

/// Replaces the row's email and re-runs email validation only.
pub fn edit_email(row: &mut ParsedRow, value: &str) {
    row.email = value.trim().to_lowercase();
    retain_other_errors(row, "email");
    if let Some(error) = email_error(&row.email) {
        row.errors.push(error.to_string());
    }
}

/// Replaces the row's phone from a manually entered value.
///
/// Manual entry overrides inference: the value is normalized without any
/// assumed dial code and `phone_assumed` is always cleared.
pub fn edit_phone(row: &mut ParsedRow, value: &str) {
    row.raw_phone = value.trim().to_string();
    row.phone_assumed = false;
    retain_other_errors(row, "phone");
    let mut errors = Vec::new();
    let (phone, _) = validate_phone(&row.raw_phone, None, &mut errors);
    row.phone = phone;
    row.errors.extend(errors);
}

/// Replaces the row's name. Names carry no validation.
pub fn edit_name(row: &mut ParsedRow, value: &str) {
    row.name = value.trim().to_string();
}

/// Replaces the row's role, re-normalizing the raw value.
pub fn edit_role(row: &mut ParsedRow, value: &str) {
    row.role = Role::parse(value);
}

/// Drops only the errors that mention the edited field.
fn retain_other_errors(row: &mut ParsedRow, field: &str) {
    row.errors
        .retain(|error| !error.to_lowercase().contains(field));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{EMAIL_INVALID, PHONE_INVALID};

    fn broken_row() -> ParsedRow {
        ParsedRow {
            email: "bad-email".to_string(),
            raw_phone: "junk".to_string(),
            errors: vec![EMAIL_INVALID.to_string(), PHONE_INVALID.to_string()],
            ..ParsedRow::default()
        }
    }

    #[test]
    fn email_edit_clears_only_email_errors() {
        let mut row = broken_row();
        edit_email(&mut row, " Fixed@Example.com ");
        assert_eq!(row.email, "fixed@example.com");
        assert_eq!(row.errors, vec![PHONE_INVALID.to_string()]);
    }

    #[test]
    fn phone_edit_clears_only_phone_errors_and_assumed_flag() {
        let mut row = broken_row();
        row.phone_assumed = true;
        edit_phone(&mut row, "+48 123 456 789");
        assert_eq!(row.phone, "+48123456789");
        assert!(!row.phone_assumed);
        assert_eq!(row.errors, vec![EMAIL_INVALID.to_string()]);
    }

    #[test]
    fn bad_phone_edit_reports_again() {
        let mut row = broken_row();
        edit_phone(&mut row, "still junk");
        assert!(row.phone.is_empty());
        assert_eq!(
            row.errors,
            vec![EMAIL_INVALID.to_string(), PHONE_INVALID.to_string()]
        );
    }

    #[test]
    fn clearing_phone_is_valid() {
        let mut row = broken_row();
        edit_phone(&mut row, "");
        assert!(row.phone.is_empty());
        assert_eq!(row.errors, vec![EMAIL_INVALID.to_string()]);
    }

    #[test]
    fn manual_bare_number_survives_without_assumption() {
        let mut row = broken_row();
        edit_phone(&mut row, "555-123-4567");
        // No assumed dial on manual entry: kept as a bare local number.
        assert_eq!(row.phone, "5551234567");
        assert!(!row.phone_assumed);
        assert_eq!(row.errors, vec![EMAIL_INVALID.to_string()]);
    }
}
