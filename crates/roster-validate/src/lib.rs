//! Row parsing, validation, and scoped field edits.

pub mod edit;
pub mod parse;

pub use edit::{edit_email, edit_name, edit_phone, edit_role};
pub use parse::{
    EMAIL_INVALID, EMAIL_REQUIRED, PHONE_INVALID, PHONE_US_LENGTH, parse_row, parse_rows,
};
