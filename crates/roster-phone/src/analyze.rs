//! Batch country-code inference.
//!
//! Given the raw phone column and a contextual hint, decide whether the
//! batch looks like a particular country's local format and whether a
//! dial code needs to be assumed at all. Heuristic and non-authoritative:
//! the result is a default the user can always override.

use roster_model::Country;
use tracing::debug;

use crate::dial::match_dial_prefix;
use crate::normalize::{has_explicit_dial_code, strip_formatting};

/// Summary of a batch of raw phone values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneBatchAnalysis {
    /// Non-empty phone values in the batch.
    pub total_phones: usize,
    /// Values that already carry their own dial code.
    pub phones_with_code: usize,
    /// Values that would need an assumed dial code.
    pub phones_needing_code: usize,
    /// True when at least half the batch exhibits US formatting
    /// conventions (10 bare digits, dotted groups, parenthesized groups).
    pub looks_like_us: bool,
    /// Best-effort default country, if any phones need a code.
    pub suggested_country: Option<Country>,
}

/// Analyzes a batch of raw phone values against an optional hint country.
///
/// Pure and re-runnable: inputs are never mutated, so callers may invoke
/// this as often as mapping or preview state changes.
#[must_use]
pub fn analyze_batch(phones: &[String], hint: Option<&Country>) -> PhoneBatchAnalysis {
    let mut total = 0usize;
    let mut with_code = 0usize;
    let mut us_shaped = 0usize;

    for raw in phones {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        total += 1;
        let cleaned = strip_formatting(trimmed);
        if has_explicit_dial_code(&cleaned) {
            with_code += 1;
        }
        if is_us_shaped(trimmed, &cleaned) {
            us_shaped += 1;
        }
    }

    let needing = total - with_code;
    let looks_like_us = total > 0 && us_shaped * 2 >= total;
    let suggested_country = if needing > 0 {
        if looks_like_us {
            Some(Country::us())
        } else {
            hint.cloned()
        }
    } else {
        None
    };
    debug!(
        total,
        with_code,
        needing,
        looks_like_us,
        suggested = suggested_country.as_ref().map(|c| c.alpha2.as_str()),
        "analyzed phone batch"
    );

    PhoneBatchAnalysis {
        total_phones: total,
        phones_with_code: with_code,
        phones_needing_code: needing,
        looks_like_us,
        suggested_country,
    }
}

/// Derives a country from a phone value that carries an explicit dial
/// code. Used to bias the suggestion from the inviting user's own
/// verified phone; never used to validate or reject an import.
#[must_use]
pub fn country_from_phone(raw: &str) -> Option<Country> {
    let cleaned = strip_formatting(raw);
    let digits = if let Some(rest) = cleaned.strip_prefix('+') {
        rest.to_string()
    } else if let Some(rest) = cleaned.strip_prefix("00") {
        rest.to_string()
    } else if cleaned.len() == 11
        && cleaned.starts_with('1')
        && cleaned.chars().all(|ch| ch.is_ascii_digit())
    {
        cleaned
    } else {
        return None;
    };
    match_dial_prefix(&digits).map(|code| code.to_country())
}

fn is_us_shaped(raw: &str, cleaned: &str) -> bool {
    let bare_ten = cleaned.len() == 10 && cleaned.chars().all(|ch| ch.is_ascii_digit());
    let dotted = raw.contains('.') && cleaned.chars().all(|ch| ch.is_ascii_digit());
    let parenthesized = raw.contains('(') && raw.contains(')');
    bare_ten || dotted || parenthesized
}
