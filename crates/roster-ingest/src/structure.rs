//! Header detection and table structuring.

use tracing::{debug, info};

use roster_map::{classify_column, contains_header_keyword};
use roster_model::{ColumnMapping, RawTable, looks_like_email};

/// A structured table: derived column names, data rows padded to a
/// uniform width, and the auto-detected column mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStructure {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub mapping: ColumnMapping,
}

/// Decides whether a row is a header row.
///
/// A row is a header iff it contains at least one header keyword and no
/// email-shaped value. The second condition keeps a data row that happens
/// to contain a word like "name" in free text from being eaten as a
/// header.
#[must_use]
pub fn detect_has_header(row: &[String]) -> bool {
    let has_keyword = row.iter().any(|cell| contains_header_keyword(cell));
    let has_email = row.iter().any(|cell| looks_like_email(cell));
    has_keyword && !has_email
}

/// Structures a decoded table: derives headers (synthesizing `Column N`
/// names when the first row is data), pads rows to the widest width, and
/// classifies every column over the full data-row sample pool.
#[must_use]
pub fn structure_table(table: &RawTable) -> TableStructure {
    let width = table.column_count();
    if width == 0 {
        return TableStructure {
            headers: Vec::new(),
            rows: Vec::new(),
            mapping: ColumnMapping::new(0),
        };
    }

    let has_header = table
        .rows()
        .first()
        .is_some_and(|row| detect_has_header(row));
    let headers: Vec<String> = if has_header {
        (0..width)
            .map(|idx| {
                table.rows()[0]
                    .get(idx)
                    .map(String::as_str)
                    .unwrap_or("")
                    .to_string()
            })
            .collect()
    } else {
        (1..=width).map(|n| format!("Column {n}")).collect()
    };

    let skip = usize::from(has_header);
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .skip(skip)
        .map(|row| pad_row(row, width))
        .collect();

    let mut mapping = ColumnMapping::new(width);
    for (idx, header) in headers.iter().enumerate() {
        let samples: Vec<String> = rows
            .iter()
            .map(|row| row[idx].clone())
            .collect();
        let column_type = classify_column(header, &samples);
        mapping.assign(idx, column_type);
        debug!(column = idx, header, %column_type, "auto-detected column type");
    }
    info!(
        columns = width,
        data_rows = rows.len(),
        has_header,
        "structured uploaded table"
    );

    TableStructure {
        headers,
        rows,
        mapping,
    }
}

fn pad_row(row: &[String], width: usize) -> Vec<String> {
    let mut padded = Vec::with_capacity(width);
    for idx in 0..width {
        padded.push(row.get(idx).cloned().unwrap_or_default());
    }
    padded
}
