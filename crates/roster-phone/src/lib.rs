//! Phone normalization and country-code inference.
//!
//! Pure functions only: no I/O, no shared state. The dial-code table is
//! loaded and sorted once at startup and exposed as an immutable lookup.

pub mod analyze;
pub mod dial;
pub mod normalize;

pub use analyze::{PhoneBatchAnalysis, analyze_batch, country_from_phone};
pub use dial::{DialCode, country_for_alpha2, dial_codes, match_dial_prefix, resolve_alpha2};
pub use normalize::{
    NormalizedPhone, has_explicit_dial_code, is_strict_e164, normalize, strip_formatting,
};
