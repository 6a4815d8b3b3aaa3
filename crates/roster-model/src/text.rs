//! Small text predicates shared by the classifier and the row validator.

/// Structural email check: one `@` with a non-empty local part and a
/// dotted domain, no whitespace. Deliberately simple; deliverability is
/// the invitation service's problem, not the importer's.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let has_dot = domain.contains('.');
    has_dot && labels.all(|label| !label.is_empty())
}

/// True when the value looks like an email at all (used by header
/// detection to tell a data row from a header row).
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    is_valid_email(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("  First.Last+tag@sub.example.org "));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }
}
