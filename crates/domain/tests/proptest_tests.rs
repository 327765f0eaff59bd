//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{SpeechParams, Utterance};
use proptest::prelude::*;

mod utterance_tests {
    use super::*;

    proptest! {
        #[test]
        fn normalization_is_idempotent(text in ".{0,80}") {
            let first = Utterance::new(text);
            let second = Utterance::new(first.normalized());
            prop_assert_eq!(first.normalized(), second.normalized());
        }

        #[test]
        fn normalized_has_no_surrounding_whitespace(text in ".{0,80}") {
            let u = Utterance::new(text);
            prop_assert_eq!(u.normalized(), u.normalized().trim());
        }

        #[test]
        fn normalized_is_lowercase(text in "[a-zA-Z ]{0,40}") {
            let u = Utterance::new(text);
            prop_assert_eq!(u.normalized().to_string(), u.normalized().to_lowercase());
        }

        #[test]
        fn case_and_whitespace_do_not_change_normalized_form(text in "[a-z ]{1,40}") {
            let plain = Utterance::new(text.clone());
            let shouted = Utterance::new(format!("  {}  ", text.to_uppercase()));
            prop_assert_eq!(plain.normalized(), shouted.normalized());
        }
    }
}

mod speech_params_tests {
    use super::*;

    proptest! {
        #[test]
        fn in_range_params_validate(
            rate in 0.1f32..=10.0f32,
            pitch in 0.0f32..=2.0f32,
            volume in 0.0f32..=1.0f32
        ) {
            let params = SpeechParams { rate, pitch, volume };
            prop_assert!(params.validate().is_ok());
        }

        #[test]
        fn out_of_range_rate_rejected(rate in 10.1f32..=1000.0f32) {
            let params = SpeechParams { rate, ..SpeechParams::default() };
            prop_assert!(params.validate().is_err());
        }
    }
}
