//! Single-value phone normalization to E.164.

/// Outcome of normalizing one phone value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPhone {
    /// `+` followed by 8-15 digits, or a bare 7-15 digit local number when
    /// no dial code was present or assumed.
    pub value: String,
    /// True iff the dial code came from the caller's assumption rather
    /// than the source value.
    pub assumed: bool,
}

/// Removes the formatting characters people type into phone cells:
/// spaces, hyphens, parentheses and dots. Everything else is kept so a
/// genuinely malformed value still fails validation.
#[must_use]
pub fn strip_formatting(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '(' | ')' | '.'))
        .collect()
}

/// Strict E.164 shape: `+` followed by 8-15 digits.
#[must_use]
pub fn is_strict_e164(value: &str) -> bool {
    let Some(rest) = value.strip_prefix('+') else {
        return false;
    };
    (8..=15).contains(&rest.len()) && rest.chars().all(|ch| ch.is_ascii_digit())
}

/// True when a cleaned value already carries its own dial code: a leading
/// `+`, the `00` international-dialing prefix, or the NANP special case
/// of 11 digits starting with `1`.
#[must_use]
pub fn has_explicit_dial_code(cleaned: &str) -> bool {
    if cleaned.starts_with('+') || cleaned.starts_with("00") {
        return true;
    }
    cleaned.len() == 11 && cleaned.starts_with('1') && all_digits(cleaned)
}

/// Normalizes one raw phone value.
///
/// Detection order: explicit `+` code (an unrecognized code still counts
/// as a code, preserving user intent), `00` prefix, the NANP 11-digit
/// case, then the assumed dial code if one was provided. With no code
/// available at all, a bare 7-15 digit value is accepted as a local
/// number so rows are not force-invalidated before the caller has had a
/// chance to ask the user for a country.
///
/// Returns `None` when the value cannot be made valid.
#[must_use]
pub fn normalize(raw: &str, assumed_dial: Option<&str>) -> Option<NormalizedPhone> {
    let cleaned = strip_formatting(raw);
    if cleaned.is_empty() {
        return None;
    }

    if let Some(rest) = cleaned.strip_prefix('+') {
        return explicit(rest);
    }
    if let Some(rest) = cleaned.strip_prefix("00") {
        return explicit(rest);
    }
    if !all_digits(&cleaned) {
        return None;
    }
    if cleaned.len() == 11 && cleaned.starts_with('1') {
        return Some(NormalizedPhone {
            value: format!("+{cleaned}"),
            assumed: false,
        });
    }
    if let Some(dial) = assumed_dial {
        let value = format!("{dial}{cleaned}");
        return is_strict_e164(&value).then_some(NormalizedPhone {
            value,
            assumed: true,
        });
    }
    // Permissive fallback: bare local number, no code known or assumed.
    (7..=15)
        .contains(&cleaned.len())
        .then_some(NormalizedPhone {
            value: cleaned,
            assumed: false,
        })
}

fn explicit(digits: &str) -> Option<NormalizedPhone> {
    if !all_digits(digits) {
        return None;
    }
    let value = format!("+{digits}");
    is_strict_e164(&value).then_some(NormalizedPhone {
        value,
        assumed: false,
    })
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(raw: &str, assumed: Option<&str>) -> String {
        normalize(raw, assumed).map(|n| n.value).unwrap_or_default()
    }

    #[test]
    fn canonical_input_is_idempotent_after_stripping() {
        assert_eq!(value("+48 123 456 789", None), "+48123456789");
        assert_eq!(value("+48123456789", None), "+48123456789");
    }

    #[test]
    fn zero_zero_prefix_is_international() {
        assert_eq!(value("0048 123 456 789", None), "+48123456789");
    }

    #[test]
    fn nanp_eleven_digit_case() {
        assert_eq!(value("1 (555) 123-4567", None), "+15551234567");
    }

    #[test]
    fn assumed_dial_is_prepended() {
        let normalized = normalize("555-123-4567", Some("+1")).expect("valid");
        assert_eq!(normalized.value, "+15551234567");
        assert!(normalized.assumed);
    }

    #[test]
    fn explicit_code_is_never_marked_assumed() {
        let normalized = normalize("+15551234567", Some("+48")).expect("valid");
        assert_eq!(normalized.value, "+15551234567");
        assert!(!normalized.assumed);
    }

    #[test]
    fn unrecognized_plus_code_is_still_explicit() {
        // +999 is not in the table; the value keeps its own code anyway.
        let normalized = normalize("+999 1234567", Some("+1")).expect("valid");
        assert_eq!(normalized.value, "+9991234567");
        assert!(!normalized.assumed);
    }

    #[test]
    fn bare_local_number_fallback() {
        let normalized = normalize("5551234", None).expect("valid");
        assert_eq!(normalized.value, "5551234");
        assert!(!normalized.assumed);
    }

    #[test]
    fn rejects_garbage() {
        assert!(normalize("", None).is_none());
        assert!(normalize("call me", None).is_none());
        assert!(normalize("12ab34", Some("+1")).is_none());
        assert!(normalize("123456", None).is_none()); // too short bare
        assert!(normalize("+1234", None).is_none()); // too short for E.164
        assert!(normalize("1234567890123456", None).is_none()); // too long
    }
}
