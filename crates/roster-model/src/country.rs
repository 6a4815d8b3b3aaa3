//! Country selection used for dial-code assumptions.

use serde::{Deserialize, Serialize};

/// A country as the import flow sees it: ISO alpha-2 code plus the E.164
/// dial prefix (with leading `+`).
///
/// Used both as the session-global dial-code assumption and as the
/// contextual hint derived from billing data or the inviter's own phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, upper case (e.g. "US", "PL").
    pub alpha2: String,
    /// E.164 dial prefix including the `+` (e.g. "+1", "+48").
    pub dial: String,
}

impl Country {
    pub fn new(alpha2: impl Into<String>, dial: impl Into<String>) -> Self {
        Self {
            alpha2: alpha2.into().to_uppercase(),
            dial: dial.into(),
        }
    }

    /// US/Canada under the North American Numbering Plan.
    #[must_use]
    pub fn us() -> Self {
        Self::new("US", "+1")
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.alpha2, self.dial)
    }
}
