//! Parsed row and submission record shapes.

use serde::{Deserialize, Serialize};

/// Role granted to an invited member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Member,
}

impl Role {
    /// Normalizes a raw role cell. Anything containing "admin" (case
    /// insensitive) grants admin; everything else, including an empty
    /// cell, is a plain member.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        if lowered.contains("admin") {
            Self::Admin
        } else {
            Self::Member
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated import row, the unit of work for preview and submission.
///
/// Field problems are accumulated in `errors` as display strings rather
/// than raised: a bad phone or email is an expected, rendered condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRow {
    /// Lower-cased, trimmed email address. Empty when the cell was blank.
    pub email: String,
    /// Trimmed display name. Optional.
    pub name: String,
    /// Normalized phone: empty, strict E.164, or a bare 7-15 digit local
    /// number kept when no dial code was available to assume.
    pub phone: String,
    /// The original phone cell, preserved so edits start from what the
    /// user actually typed.
    pub raw_phone: String,
    /// True iff `phone` carries a dial code supplied by the session-wide
    /// assumption rather than one present in the source value.
    pub phone_assumed: bool,
    pub role: Role,
    /// Validation messages in emission order. Empty means invitable.
    pub errors: Vec<String>,
}

impl ParsedRow {
    /// A row may be submitted iff nothing is wrong with it and it has an
    /// email to invite.
    #[must_use]
    pub fn is_invitable(&self) -> bool {
        self.errors.is_empty() && !self.email.is_empty()
    }

    /// Converts an invitable row into the submission wire shape.
    ///
    /// Returns `None` for rows that must not be submitted.
    #[must_use]
    pub fn to_invite(&self) -> Option<InviteRecord> {
        if !self.is_invitable() {
            return None;
        }
        Some(InviteRecord {
            email: self.email.clone(),
            name: (!self.name.is_empty()).then(|| self.name.clone()),
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
            role: self.role,
        })
    }
}

/// Record shape accepted by the bulk-invitation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteRecord {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_lenient() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("  Administrator "), Role::Admin);
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("member"), Role::Member);
        assert_eq!(Role::parse("viewer"), Role::Member);
        assert_eq!(Role::parse(""), Role::Member);
    }

    #[test]
    fn invitable_requires_email_and_no_errors() {
        let mut row = ParsedRow {
            email: "a@b.com".to_string(),
            ..ParsedRow::default()
        };
        assert!(row.is_invitable());
        row.errors.push("Invalid phone format".to_string());
        assert!(!row.is_invitable());
        row.errors.clear();
        row.email.clear();
        assert!(!row.is_invitable());
    }

    #[test]
    fn invite_record_omits_empty_optionals() {
        let row = ParsedRow {
            email: "a@b.com".to_string(),
            role: Role::Admin,
            ..ParsedRow::default()
        };
        let record = row.to_invite().expect("invitable");
        let json = serde_json::to_string(&record).expect("serialize invite");
        assert_eq!(json, r#"{"email":"a@b.com","role":"admin"}"#);
    }
}
