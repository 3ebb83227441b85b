use proptest::prelude::*;
use serde_json::Value;

use termbridge_core::models::{Confidence, MappingMethod};

proptest! {
    #[test]
    fn confidence_is_always_clamped(value in -1e6f64..1e6f64) {
        let c = Confidence::new(value);
        prop_assert!(
            (0.0..=1.0).contains(&c.value()),
            "Confidence::new({value}) = {}",
            c.value()
        );
    }

    #[test]
    fn in_range_values_pass_through_unchanged(value in 0.0f64..=1.0f64) {
        prop_assert_eq!(Confidence::new(value).value(), value);
    }

    #[test]
    fn above_floor_agrees_with_the_raw_comparison(value in 0.0f64..=1.0f64) {
        prop_assert_eq!(Confidence::new(value).above_floor(), value >= Confidence::FLOOR);
    }

    #[test]
    fn classification_without_survivors_ignores_confidence(
        value in 0.0f64..=1.0f64,
        any_query_failed in any::<bool>(),
    ) {
        let method = MappingMethod::classify(Confidence::new(value), any_query_failed, false);
        let expected = if any_query_failed {
            MappingMethod::SearchFailed
        } else {
            MappingMethod::NoResults
        };
        prop_assert_eq!(method, expected);
    }

    #[test]
    fn classification_with_survivors_is_failure_flag_independent(value in 0.0f64..=1.0f64) {
        let clean = MappingMethod::classify(Confidence::new(value), false, true);
        let degraded = MappingMethod::classify(Confidence::new(value), true, true);
        prop_assert_eq!(clean, degraded);
        prop_assert!(!matches!(
            clean,
            MappingMethod::NoResults | MappingMethod::SearchFailed | MappingMethod::SystemError
        ));
    }

    #[test]
    fn method_serializes_to_its_wire_name(
        value in 0.0f64..=1.0f64,
        any_query_failed in any::<bool>(),
        any_survivor in any::<bool>(),
    ) {
        let method = MappingMethod::classify(
            Confidence::new(value),
            any_query_failed,
            any_survivor,
        );
        let serialized = serde_json::to_value(method).unwrap();
        prop_assert_eq!(serialized, Value::String(method.as_str().to_string()));
    }
}
