//! Static dial-code lookup.
//!
//! One table, sorted by descending prefix length at first use, so that
//! longest-prefix matching is a linear scan that can never let `+1`
//! swallow a NANP sub-code like `+1809`.

use std::sync::LazyLock;

use roster_model::{Country, Result, RosterError};

/// One known dial code. `prefix` holds digits only, no `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialCode {
    pub alpha2: &'static str,
    pub prefix: &'static str,
}

impl DialCode {
    /// The prefix in display form, e.g. "+48".
    #[must_use]
    pub fn dial(&self) -> String {
        format!("+{}", self.prefix)
    }

    #[must_use]
    pub fn to_country(&self) -> Country {
        Country::new(self.alpha2, self.dial())
    }
}

/// Known dial codes. Not exhaustive, but wide enough to cover the
/// countries a B2B tenant realistically imports members from, plus the
/// NANP sub-codes that make longest-prefix matching matter.
const DIAL_CODES: &[DialCode] = &[
    // NANP territories with their own country codes
    DialCode { alpha2: "BS", prefix: "1242" },
    DialCode { alpha2: "BB", prefix: "1246" },
    DialCode { alpha2: "AI", prefix: "1264" },
    DialCode { alpha2: "AG", prefix: "1268" },
    DialCode { alpha2: "VG", prefix: "1284" },
    DialCode { alpha2: "VI", prefix: "1340" },
    DialCode { alpha2: "KY", prefix: "1345" },
    DialCode { alpha2: "BM", prefix: "1441" },
    DialCode { alpha2: "GD", prefix: "1473" },
    DialCode { alpha2: "TC", prefix: "1649" },
    DialCode { alpha2: "MS", prefix: "1664" },
    DialCode { alpha2: "SX", prefix: "1721" },
    DialCode { alpha2: "LC", prefix: "1758" },
    DialCode { alpha2: "DM", prefix: "1767" },
    DialCode { alpha2: "VC", prefix: "1784" },
    DialCode { alpha2: "PR", prefix: "1787" },
    DialCode { alpha2: "DO", prefix: "1809" },
    DialCode { alpha2: "TT", prefix: "1868" },
    DialCode { alpha2: "KN", prefix: "1869" },
    DialCode { alpha2: "JM", prefix: "1876" },
    // Three-digit codes
    DialCode { alpha2: "MA", prefix: "212" },
    DialCode { alpha2: "DZ", prefix: "213" },
    DialCode { alpha2: "TN", prefix: "216" },
    DialCode { alpha2: "SN", prefix: "221" },
    DialCode { alpha2: "GH", prefix: "233" },
    DialCode { alpha2: "NG", prefix: "234" },
    DialCode { alpha2: "KE", prefix: "254" },
    DialCode { alpha2: "TZ", prefix: "255" },
    DialCode { alpha2: "UG", prefix: "256" },
    DialCode { alpha2: "ZM", prefix: "260" },
    DialCode { alpha2: "ZW", prefix: "263" },
    DialCode { alpha2: "PT", prefix: "351" },
    DialCode { alpha2: "LU", prefix: "352" },
    DialCode { alpha2: "IE", prefix: "353" },
    DialCode { alpha2: "IS", prefix: "354" },
    DialCode { alpha2: "FI", prefix: "358" },
    DialCode { alpha2: "BG", prefix: "359" },
    DialCode { alpha2: "LT", prefix: "370" },
    DialCode { alpha2: "LV", prefix: "371" },
    DialCode { alpha2: "EE", prefix: "372" },
    DialCode { alpha2: "UA", prefix: "380" },
    DialCode { alpha2: "HR", prefix: "385" },
    DialCode { alpha2: "SI", prefix: "386" },
    DialCode { alpha2: "CZ", prefix: "420" },
    DialCode { alpha2: "SK", prefix: "421" },
    DialCode { alpha2: "HK", prefix: "852" },
    DialCode { alpha2: "MO", prefix: "853" },
    DialCode { alpha2: "BD", prefix: "880" },
    DialCode { alpha2: "TW", prefix: "886" },
    DialCode { alpha2: "LB", prefix: "961" },
    DialCode { alpha2: "JO", prefix: "962" },
    DialCode { alpha2: "KW", prefix: "965" },
    DialCode { alpha2: "SA", prefix: "966" },
    DialCode { alpha2: "AE", prefix: "971" },
    DialCode { alpha2: "IL", prefix: "972" },
    DialCode { alpha2: "QA", prefix: "974" },
    // Two-digit codes
    DialCode { alpha2: "EG", prefix: "20" },
    DialCode { alpha2: "ZA", prefix: "27" },
    DialCode { alpha2: "GR", prefix: "30" },
    DialCode { alpha2: "NL", prefix: "31" },
    DialCode { alpha2: "BE", prefix: "32" },
    DialCode { alpha2: "FR", prefix: "33" },
    DialCode { alpha2: "ES", prefix: "34" },
    DialCode { alpha2: "HU", prefix: "36" },
    DialCode { alpha2: "IT", prefix: "39" },
    DialCode { alpha2: "RO", prefix: "40" },
    DialCode { alpha2: "CH", prefix: "41" },
    DialCode { alpha2: "AT", prefix: "43" },
    DialCode { alpha2: "GB", prefix: "44" },
    DialCode { alpha2: "DK", prefix: "45" },
    DialCode { alpha2: "SE", prefix: "46" },
    DialCode { alpha2: "NO", prefix: "47" },
    DialCode { alpha2: "PL", prefix: "48" },
    DialCode { alpha2: "DE", prefix: "49" },
    DialCode { alpha2: "PE", prefix: "51" },
    DialCode { alpha2: "MX", prefix: "52" },
    DialCode { alpha2: "AR", prefix: "54" },
    DialCode { alpha2: "BR", prefix: "55" },
    DialCode { alpha2: "CL", prefix: "56" },
    DialCode { alpha2: "CO", prefix: "57" },
    DialCode { alpha2: "MY", prefix: "60" },
    DialCode { alpha2: "AU", prefix: "61" },
    DialCode { alpha2: "ID", prefix: "62" },
    DialCode { alpha2: "PH", prefix: "63" },
    DialCode { alpha2: "NZ", prefix: "64" },
    DialCode { alpha2: "SG", prefix: "65" },
    DialCode { alpha2: "TH", prefix: "66" },
    DialCode { alpha2: "JP", prefix: "81" },
    DialCode { alpha2: "KR", prefix: "82" },
    DialCode { alpha2: "VN", prefix: "84" },
    DialCode { alpha2: "CN", prefix: "86" },
    DialCode { alpha2: "TR", prefix: "90" },
    DialCode { alpha2: "IN", prefix: "91" },
    DialCode { alpha2: "PK", prefix: "92" },
    DialCode { alpha2: "LK", prefix: "94" },
    DialCode { alpha2: "IR", prefix: "98" },
    // One-digit codes
    DialCode { alpha2: "US", prefix: "1" },
    DialCode { alpha2: "RU", prefix: "7" },
];

static SORTED: LazyLock<Vec<DialCode>> = LazyLock::new(|| {
    let mut codes = DIAL_CODES.to_vec();
    codes.sort_by(|a, b| {
        b.prefix
            .len()
            .cmp(&a.prefix.len())
            .then_with(|| a.prefix.cmp(b.prefix))
    });
    codes
});

/// All known codes, longest prefix first.
#[must_use]
pub fn dial_codes() -> &'static [DialCode] {
    &SORTED
}

/// Longest-prefix match of a bare digit string (no `+`) against the table.
#[must_use]
pub fn match_dial_prefix(digits: &str) -> Option<&'static DialCode> {
    SORTED.iter().find(|code| digits.starts_with(code.prefix))
}

/// Looks up a country by ISO alpha-2 code, case insensitive.
#[must_use]
pub fn country_for_alpha2(alpha2: &str) -> Option<Country> {
    let wanted = alpha2.trim();
    SORTED
        .iter()
        .find(|code| code.alpha2.eq_ignore_ascii_case(wanted))
        .map(DialCode::to_country)
}

/// Like [`country_for_alpha2`], but fails with a displayable error for
/// user-supplied codes.
pub fn resolve_alpha2(alpha2: &str) -> Result<Country> {
    country_for_alpha2(alpha2)
        .ok_or_else(|| RosterError::Message(format!("unknown country code: {alpha2}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_prefix_wins_over_nanp_umbrella() {
        let code = match_dial_prefix("18095551234").expect("match");
        assert_eq!(code.alpha2, "DO");
        let code = match_dial_prefix("12125551234").expect("match");
        assert_eq!(code.alpha2, "US");
    }

    #[test]
    fn alpha2_lookup_is_case_insensitive() {
        let country = country_for_alpha2("pl").expect("known");
        assert_eq!(country.dial, "+48");
        assert!(country_for_alpha2("XX").is_none());
        assert!(resolve_alpha2("XX").is_err());
    }

    #[test]
    fn table_is_sorted_longest_first() {
        let codes = dial_codes();
        for pair in codes.windows(2) {
            assert!(pair[0].prefix.len() >= pair[1].prefix.len());
        }
    }
}
