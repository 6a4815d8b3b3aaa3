//! Property tests for the phone normalizer.

use proptest::prelude::*;
use roster_phone::{is_strict_e164, normalize};

proptest! {
    // Already-canonical input is idempotent: a recognized +code value
    // normalizes to itself after separator stripping.
    #[test]
    fn canonical_e164_is_fixed_point(digits in "[0-9]{8,15}") {
        let raw = format!("+{digits}");
        let normalized = normalize(&raw, None).expect("canonical input is valid");
        prop_assert_eq!(normalized.value, raw);
        prop_assert!(!normalized.assumed);
    }

    // Any 10-digit bare value with an assumed dial becomes dial + digits.
    #[test]
    fn assumed_dial_prepends_ten_digit_values(digits in "[0-9]{10}") {
        let normalized = normalize(&digits, Some("+1")).expect("valid under +1");
        prop_assert_eq!(normalized.value, format!("+1{digits}"));
        prop_assert!(normalized.assumed);
    }

    // Whatever comes out is either empty-equivalent (None), strict E.164,
    // or a bare 7-15 digit local number. Nothing partially normalized.
    #[test]
    fn output_shape_is_always_valid(raw in "[0-9 ().+-]{0,20}", assume in proptest::bool::ANY) {
        let assumed_dial = assume.then_some("+44");
        if let Some(normalized) = normalize(&raw, assumed_dial) {
            let bare_local = (7..=15).contains(&normalized.value.len())
                && normalized.value.chars().all(|ch| ch.is_ascii_digit());
            prop_assert!(is_strict_e164(&normalized.value) || bare_local);
        }
    }

    // Formatting characters never change the outcome.
    #[test]
    fn separators_are_transparent(digits in "[0-9]{10}") {
        let formatted = format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]);
        prop_assert_eq!(normalize(&formatted, Some("+1")), normalize(&digits, Some("+1")));
    }
}
