//! CSV decoding into a [`RawTable`].

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use roster_model::RawTable;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a delimited file into a [`RawTable`].
///
/// The reader is flexible (ragged rows are allowed) and header-agnostic:
/// header detection happens later, over the decoded table. Fully blank
/// rows are dropped here.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    collect_rows(reader).with_context(|| format!("read csv: {}", path.display()))
}

/// Reads a delimited stream into a [`RawTable`]. Used by tests and by
/// callers that already hold the upload in memory.
pub fn read_raw_table_from_reader<R: Read>(input: R) -> Result<RawTable> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    collect_rows(reader)
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<RawTable> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("read csv record")?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), "decoded csv upload");
    Ok(RawTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_drops_blank_rows() {
        let input = "Email,Name\n\na@b.com,Jane\n , \nb@c.com,Joe\n";
        let table = read_raw_table_from_reader(input.as_bytes()).expect("decode");
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows()[1], vec!["a@b.com", "Jane"]);
    }

    #[test]
    fn strips_byte_order_mark() {
        let input = "\u{feff}Email,Name\na@b.com,Jane\n";
        let table = read_raw_table_from_reader(input.as_bytes()).expect("decode");
        assert_eq!(table.rows()[0][0], "Email");
    }

    #[test]
    fn ragged_rows_are_kept() {
        let input = "a@b.com,Jane,555\nb@c.com\n";
        let table = read_raw_table_from_reader(input.as_bytes()).expect("decode");
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
    }
}
