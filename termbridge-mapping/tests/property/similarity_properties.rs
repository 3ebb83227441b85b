use proptest::prelude::*;

use termbridge_core::models::{SourceTerm, TargetEntry};
use termbridge_mapping::aggregate::{aggregate, AggregatorWeights};
use termbridge_mapping::similarity::similarity;

proptest! {
    #[test]
    fn similarity_is_always_in_unit_interval(a in ".{0,60}", b in ".{0,60}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "similarity({a:?}, {b:?}) = {score}");
    }

    #[test]
    fn similarity_is_symmetric(a in ".{0,60}", b in ".{0,60}") {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn normalized_equal_pairs_score_exactly_one(s in "[a-z][a-z ]{0,40}[a-z]") {
        let shouty = s.to_uppercase();
        let padded = format!("  {s} ");
        prop_assert_eq!(similarity(&s, &shouty), 1.0);
        prop_assert_eq!(similarity(&s, &padded), 1.0);
    }

    #[test]
    fn empty_side_scores_zero(s in ".{0,60}") {
        prop_assert_eq!(similarity("", &s), 0.0);
        prop_assert_eq!(similarity(&s, "   "), 0.0);
    }

    #[test]
    fn aggregate_is_always_in_unit_interval(
        label in ".{0,40}",
        title in ".{0,40}",
        synonym in ".{0,20}",
        subcategory in ".{0,15}",
    ) {
        let source = SourceTerm::new("T1", label, "Ayurveda")
            .with_synonyms(vec![synonym]);
        let mut target = TargetEntry::new("e1", "C1", title);
        target.subcategory = subcategory;

        let score = aggregate(&source, &target, &AggregatorWeights::default());
        prop_assert!((0.0..=1.0).contains(&score), "aggregate = {score}");
    }
}
