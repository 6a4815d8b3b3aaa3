//! Integration tests for row parsing against a column mapping.

use roster_model::{ColumnMapping, ColumnType, Role};
use roster_validate::{
    EMAIL_INVALID, EMAIL_REQUIRED, PHONE_INVALID, PHONE_US_LENGTH, parse_rows,
};

fn row(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn standard_mapping() -> ColumnMapping {
    let mut mapping = ColumnMapping::new(4);
    mapping.assign(0, ColumnType::Email);
    mapping.assign(1, ColumnType::Name);
    mapping.assign(2, ColumnType::Phone);
    mapping.assign(3, ColumnType::Role);
    mapping
}

#[test]
fn valid_and_invalid_rows() {
    let rows = vec![
        row(&["a@b.com", "John", "555-123-4567", "admin"]),
        row(&["bad-email", "Jane", "", "member"]),
    ];
    let parsed = parse_rows(&rows, &standard_mapping(), Some("+1"));

    assert!(parsed[0].errors.is_empty());
    assert_eq!(parsed[0].email, "a@b.com");
    assert_eq!(parsed[0].phone, "+15551234567");
    assert!(parsed[0].phone_assumed);
    assert_eq!(parsed[0].role, Role::Admin);
    assert!(parsed[0].is_invitable());

    // Bad email, but the empty phone is valid: phone is optional.
    assert_eq!(parsed[1].errors, vec![EMAIL_INVALID.to_string()]);
    assert!(parsed[1].phone.is_empty());
    assert!(!parsed[1].phone_assumed);
    assert_eq!(parsed[1].role, Role::Member);
    assert!(!parsed[1].is_invitable());
}

#[test]
fn missing_email_is_required() {
    let rows = vec![row(&["", "Jane", "", ""])];
    let parsed = parse_rows(&rows, &standard_mapping(), None);
    assert_eq!(parsed[0].errors, vec![EMAIL_REQUIRED.to_string()]);
}

#[test]
fn unparseable_phone_is_reported() {
    let rows = vec![row(&["a@b.com", "", "not a phone", ""])];
    let parsed = parse_rows(&rows, &standard_mapping(), Some("+1"));
    assert_eq!(parsed[0].errors, vec![PHONE_INVALID.to_string()]);
    assert!(parsed[0].phone.is_empty());
    assert_eq!(parsed[0].raw_phone, "not a phone");
}

#[test]
fn us_assumption_enforces_ten_digits() {
    let rows = vec![
        row(&["a@b.com", "", "123456789", ""]),
        row(&["b@c.com", "", "+1 123 456 789", ""]),
    ];
    let parsed = parse_rows(&rows, &standard_mapping(), Some("+1"));
    // Nine digits under an assumed +1: rejected.
    assert_eq!(parsed[0].errors, vec![PHONE_US_LENGTH.to_string()]);
    assert!(parsed[0].phone.is_empty());
    // Explicit +1 values are not length-checked.
    assert!(parsed[1].errors.is_empty());
    assert_eq!(parsed[1].phone, "+1123456789");
}

#[test]
fn non_us_assumption_skips_the_ten_digit_rule() {
    let rows = vec![row(&["a@b.com", "", "123456789", ""])];
    let parsed = parse_rows(&rows, &standard_mapping(), Some("+48"));
    assert!(parsed[0].errors.is_empty());
    assert_eq!(parsed[0].phone, "+48123456789");
    assert!(parsed[0].phone_assumed);
}

#[test]
fn unmapped_columns_come_out_empty() {
    let mut mapping = ColumnMapping::new(2);
    mapping.assign(0, ColumnType::Email);
    let rows = vec![row(&["A@B.com", "ignored"])];
    let parsed = parse_rows(&rows, &mapping, None);
    assert_eq!(parsed[0].email, "a@b.com");
    assert!(parsed[0].name.is_empty());
    assert!(parsed[0].phone.is_empty());
    assert_eq!(parsed[0].role, Role::Member);
}

#[test]
fn reparsing_is_deterministic() {
    let rows = vec![
        row(&["a@b.com", "John", "(555) 123-4567", "admin"]),
        row(&["bad", "Jane", "junk", "member"]),
    ];
    let mapping = standard_mapping();
    let first = parse_rows(&rows, &mapping, Some("+1"));
    let second = parse_rows(&rows, &mapping, Some("+1"));
    assert_eq!(first, second);
}
