//! Pairwise lexical similarity between two text labels, in [0, 1].
//!
//! Priority order: exact match → substring containment → word-set Jaccard.
//! This is the canonical scoring function behind `MappingMethod`; the
//! richer display-only formula lives in [`crate::aggregate`].

use std::collections::HashSet;

/// Score the lexical similarity of two labels.
///
/// Both sides are lower-cased and whitespace-trimmed first; an empty side
/// yields 0.0. Containment scores `0.7 + 0.2 * shorter/longer`, which is
/// intrinsic to the pair, so the function stays argument-order independent.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a == b {
        return 1.0;
    }

    if a.contains(&b) || b.contains(&a) {
        let len_a = a.chars().count() as f64;
        let len_b = b.chars().count() as f64;
        let shorter = len_a.min(len_b);
        let longer = len_a.max(len_b);
        // 0.7 to 0.9 range.
        return 0.7 + (shorter / longer) * 0.2;
    }

    word_jaccard(&a, &b)
}

/// Jaccard similarity over whitespace-separated word sets.
fn word_jaccard(a: &str, b: &str) -> f64 {
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_equality_is_exactly_one() {
        assert_eq!(similarity("Fever", "fever"), 1.0);
        assert_eq!(similarity("  Jwara ", "jwara"), 1.0);
    }

    #[test]
    fn empty_either_side_is_zero() {
        assert_eq!(similarity("", "fever"), 0.0);
        assert_eq!(similarity("fever", ""), 0.0);
        assert_eq!(similarity("   ", "fever"), 0.0);
    }

    #[test]
    fn containment_lands_in_point_seven_to_point_nine() {
        let score = similarity("diabetes", "type 1 diabetes mellitus");
        assert!(score >= 0.7 && score <= 0.9, "got {score}");

        // Near-equal lengths push toward the top of the band.
        let close = similarity("fevers", "fever");
        assert!(close > score);
    }

    #[test]
    fn containment_is_order_independent() {
        let ab = similarity("fever", "viral fever syndrome");
        let ba = similarity("viral fever syndrome", "fever");
        assert_eq!(ab, ba);
    }

    #[test]
    fn word_overlap_falls_back_to_jaccard() {
        // "chronic pain" vs "pain disorder": intersection 1, union 3.
        let score = similarity("chronic pain", "pain disorder");
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn disjoint_words_score_zero() {
        assert_eq!(similarity("jwara", "cough"), 0.0);
    }
}
