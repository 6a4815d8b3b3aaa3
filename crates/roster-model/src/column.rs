//! Column typing for imported tables.

use serde::{Deserialize, Serialize};

/// Semantic role of a source column.
///
/// The set is closed: the import flow only cares about the fields needed
/// to build an invitation. Anything else is `Skip`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Email,
    Name,
    Phone,
    Role,
    #[default]
    Skip,
}

impl ColumnType {
    #[must_use]
    pub fn is_skip(self) -> bool {
        matches!(self, Self::Skip)
    }

    /// Display label used in mapping previews.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Role => "role",
            Self::Skip => "skip",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Assignment of every column in the table to a [`ColumnType`].
///
/// Invariant: at most one column holds a given non-skip type. Assigning a
/// type to a column clears that type from any other column that held it
/// (last write wins). This is enforced here, in one reducer, rather than
/// scattered across callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    types: Vec<ColumnType>,
}

impl ColumnMapping {
    /// Creates a mapping over `column_count` columns, all `Skip`.
    #[must_use]
    pub fn new(column_count: usize) -> Self {
        Self {
            types: vec![ColumnType::Skip; column_count],
        }
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.types.len()
    }

    /// Type of the given column; columns past the end are `Skip`.
    #[must_use]
    pub fn column_type(&self, index: usize) -> ColumnType {
        self.types.get(index).copied().unwrap_or_default()
    }

    /// Assigns a type to a column, clearing the type from any prior holder.
    ///
    /// Out-of-range indices are ignored: the mapping always covers exactly
    /// the columns of the table it was created for.
    pub fn assign(&mut self, index: usize, column_type: ColumnType) {
        if index >= self.types.len() {
            return;
        }
        if !column_type.is_skip() {
            for existing in &mut self.types {
                if *existing == column_type {
                    *existing = ColumnType::Skip;
                }
            }
        }
        self.types[index] = column_type;
    }

    /// Index of the column currently holding `column_type`, if any.
    #[must_use]
    pub fn column_for(&self, column_type: ColumnType) -> Option<usize> {
        if column_type.is_skip() {
            return None;
        }
        self.types.iter().position(|ty| *ty == column_type)
    }

    /// The email column, required before the flow may advance to preview.
    #[must_use]
    pub fn email_column(&self) -> Option<usize> {
        self.column_for(ColumnType::Email)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, ColumnType)> + '_ {
        self.types.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_clears_previous_holder() {
        let mut mapping = ColumnMapping::new(3);
        mapping.assign(0, ColumnType::Email);
        mapping.assign(2, ColumnType::Email);
        assert_eq!(mapping.column_type(0), ColumnType::Skip);
        assert_eq!(mapping.column_type(2), ColumnType::Email);
        assert_eq!(mapping.email_column(), Some(2));
    }

    #[test]
    fn skip_may_repeat() {
        let mut mapping = ColumnMapping::new(2);
        mapping.assign(0, ColumnType::Phone);
        mapping.assign(0, ColumnType::Skip);
        assert_eq!(mapping.column_type(0), ColumnType::Skip);
        assert_eq!(mapping.column_type(1), ColumnType::Skip);
        assert_eq!(mapping.column_for(ColumnType::Skip), None);
    }

    #[test]
    fn out_of_range_assign_is_ignored() {
        let mut mapping = ColumnMapping::new(1);
        mapping.assign(5, ColumnType::Email);
        assert_eq!(mapping.email_column(), None);
    }
}
