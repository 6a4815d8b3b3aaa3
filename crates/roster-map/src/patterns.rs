//! Keyword and token tables used by the classifier.

use roster_model::ColumnType;

/// Header keywords in priority order. First match wins, so a header like
/// "E-mail Type" classifies as email, not role.
const HEADER_KEYWORDS: &[(ColumnType, &[&str])] = &[
    (ColumnType::Email, &["email", "e-mail"]),
    (ColumnType::Name, &["name", "full name"]),
    (ColumnType::Phone, &["phone", "mobile", "tel"]),
    (ColumnType::Role, &["role", "type", "permission"]),
];

/// Values commonly found in role columns.
pub const ROLE_TOKENS: &[&str] = &["admin", "member", "user", "viewer", "owner"];

/// Matches a header label against the keyword table, case insensitive,
/// substring search.
#[must_use]
pub fn header_keyword_type(header: &str) -> Option<ColumnType> {
    let lowered = header.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    for (column_type, keywords) in HEADER_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return Some(*column_type);
        }
    }
    None
}

/// True when the cell contains any header keyword at all. Used by header
/// detection, which does not care which field the keyword names.
#[must_use]
pub fn contains_header_keyword(value: &str) -> bool {
    header_keyword_type(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_priority_order() {
        assert_eq!(header_keyword_type("E-mail Address"), Some(ColumnType::Email));
        assert_eq!(header_keyword_type("Full Name"), Some(ColumnType::Name));
        assert_eq!(header_keyword_type("Mobile #"), Some(ColumnType::Phone));
        assert_eq!(header_keyword_type("Permission Level"), Some(ColumnType::Role));
        // Ambiguous header resolves by priority, not position.
        assert_eq!(header_keyword_type("Email Type"), Some(ColumnType::Email));
        assert_eq!(header_keyword_type("Col3"), None);
    }
}
