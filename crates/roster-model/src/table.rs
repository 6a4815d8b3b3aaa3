//! Raw table storage for decoded delimited files.

use serde::{Deserialize, Serialize};

/// An uploaded file after decoding: ordered rows of string cells.
///
/// Created once per upload and never mutated afterward. Header detection
/// and column typing read from it; parsed rows are derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Wraps already-decoded rows. Fully blank rows are dropped so that
    /// trailing newlines and spacer lines never count as data.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row. Ragged inputs are padded up to this when
    /// the table is structured.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
