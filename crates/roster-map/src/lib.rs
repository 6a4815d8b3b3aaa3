//! Column classification for the member-import pipeline.

pub mod classify;
pub mod patterns;

pub use classify::classify_column;
pub use patterns::{ROLE_TOKENS, contains_header_keyword, header_keyword_type};
