//! Integration tests for header detection and structuring.

use roster_ingest::{detect_has_header, read_raw_table, structure_table};
use roster_model::{ColumnType, RawTable};
use std::io::Write;

fn row(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn keyword_row_without_email_is_a_header() {
    assert!(detect_has_header(&row(&["Email", "Name", "Phone"])));
}

#[test]
fn row_with_email_value_is_data() {
    // Contains no keyword ambiguity to save it: the email makes it data.
    assert!(!detect_has_header(&row(&["a@b.com", "Jane", "555-1234"])));
    // Even a keyword does not rescue a row carrying a real email.
    assert!(!detect_has_header(&row(&["a@b.com", "name", "555-1234"])));
}

#[test]
fn headered_table_keeps_header_out_of_data() {
    let table = RawTable::new(vec![
        row(&["Email", "Full Name", "Phone", "Role"]),
        row(&["a@b.com", "Jane", "555-123-4567", "admin"]),
    ]);
    let structure = structure_table(&table);
    assert_eq!(structure.headers, row(&["Email", "Full Name", "Phone", "Role"]));
    assert_eq!(structure.rows.len(), 1);
    assert_eq!(structure.mapping.column_type(0), ColumnType::Email);
    assert_eq!(structure.mapping.column_type(1), ColumnType::Name);
    assert_eq!(structure.mapping.column_type(2), ColumnType::Phone);
    assert_eq!(structure.mapping.column_type(3), ColumnType::Role);
}

#[test]
fn headerless_table_gets_synthetic_names_and_content_mapping() {
    let table = RawTable::new(vec![
        row(&["a@b.com", "Jane Doe", "5551234567"]),
        row(&["c@d.com", "Joe Bloggs", "5559876543"]),
    ]);
    let structure = structure_table(&table);
    assert_eq!(structure.headers, row(&["Column 1", "Column 2", "Column 3"]));
    assert_eq!(structure.rows.len(), 2);
    assert_eq!(structure.mapping.column_type(0), ColumnType::Email);
    assert_eq!(structure.mapping.column_type(1), ColumnType::Name);
    assert_eq!(structure.mapping.column_type(2), ColumnType::Phone);
}

#[test]
fn ragged_rows_are_padded_to_table_width() {
    let table = RawTable::new(vec![
        row(&["Email", "Name", "Phone"]),
        row(&["a@b.com"]),
    ]);
    let structure = structure_table(&table);
    assert_eq!(structure.rows[0], row(&["a@b.com", "", ""]));
}

#[test]
fn empty_table_structures_to_nothing() {
    let structure = structure_table(&RawTable::new(Vec::new()));
    assert!(structure.headers.is_empty());
    assert!(structure.rows.is_empty());
    assert_eq!(structure.mapping.column_count(), 0);
}

#[test]
fn reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "Email,Name\na@b.com,Jane\n").expect("write csv");
    let table = read_raw_table(file.path()).expect("read");
    assert_eq!(table.row_count(), 2);
    let structure = structure_table(&table);
    assert_eq!(structure.mapping.email_column(), Some(0));
}
