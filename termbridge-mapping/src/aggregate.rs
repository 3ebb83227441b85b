//! Multi-factor confidence aggregation for cross-system candidate display.
//!
//! Combines several weak signals (sequence similarity, word overlap,
//! synonym cross-match, category alignment, length and specificity
//! penalties) into one calibrated score. Used only when candidate pools
//! retrieved independently from the two systems are cross-ranked against a
//! single anchor term; it never feeds the orchestrator's `MappingMethod`.

use std::collections::HashSet;

use serde::Serialize;
use strsim::normalized_levenshtein;

use termbridge_core::models::{MappingQuality, SourceTerm, TargetEntry};

/// Weights and penalties for the aggregation factors.
#[derive(Debug, Clone)]
pub struct AggregatorWeights {
    pub sequence: f64,
    pub word_overlap: f64,
    pub exact_word_bonus: f64,
    pub synonym: f64,
    pub category_bonus: f64,
    /// Fraction of score lost at maximal label-length mismatch.
    pub length_penalty: f64,
    /// Flat deduction for a non-generic target subcategory.
    pub specificity_penalty: f64,
}

impl Default for AggregatorWeights {
    fn default() -> Self {
        Self {
            sequence: 0.3,
            word_overlap: 0.3,
            exact_word_bonus: 0.2,
            synonym: 0.2,
            category_bonus: 0.1,
            length_penalty: 0.2,
            specificity_penalty: 0.15,
        }
    }
}

/// Subcategory values that do not count as "specific".
const GENERIC_SUBCATEGORIES: &[&str] = &["", "general", "unspecified"];

/// How many source synonyms participate in cross-matching.
const SYNONYMS_CONSIDERED: usize = 3;

/// Cap for a direct synonym-to-label hit.
const SYNONYM_LABEL_CAP: f64 = 0.85;

/// Damping for synonym-to-synonym sequence similarity.
const SYNONYM_SYNONYM_DAMPING: f64 = 0.7;

/// Aggregate a cross-system confidence score in [0, 1].
pub fn aggregate(source: &SourceTerm, target: &TargetEntry, weights: &AggregatorWeights) -> f64 {
    let source_label = source.label.trim().to_lowercase();
    let target_label = target.title.trim().to_lowercase();

    if source_label.is_empty() || target_label.is_empty() {
        return 0.0;
    }

    // Factor 1: Global sequence similarity of the normalized labels.
    let sequence = normalized_levenshtein(&source_label, &target_label);

    // Factor 2: Word-overlap Jaccard.
    let source_words: HashSet<&str> = source_label.split_whitespace().collect();
    let target_words: HashSet<&str> = target_label.split_whitespace().collect();
    let word_overlap = if source_words.is_empty() || target_words.is_empty() {
        0.0
    } else {
        source_words.intersection(&target_words).count() as f64
            / source_words.union(&target_words).count() as f64
    };

    // Factor 3: Exact-word bonus when the source label is one of the
    // target label's words.
    let exact_word = if target_words.contains(source_label.as_str()) {
        weights.exact_word_bonus
    } else {
        0.0
    };

    // Factor 4: Synonym cross-match — best single hit over the first few
    // source synonyms against the target label and its synonyms.
    let synonym_score = synonym_cross_match(source, target, &target_label);

    // Factor 5: Category alignment.
    let category_bonus = match (&source.category, target.category.trim()) {
        (Some(sc), tc) if !sc.trim().is_empty() && !tc.is_empty() => {
            let sc = sc.trim().to_lowercase();
            let tc = tc.to_lowercase();
            if sc.contains(&tc) || tc.contains(&sc) {
                weights.category_bonus
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    // Factor 6: Length-ratio penalty for very different label lengths.
    let len_source = source_label.chars().count() as f64;
    let len_target = target_label.chars().count() as f64;
    let len_ratio = len_source.min(len_target) / len_source.max(len_target);
    let length_penalty = 1.0 - weights.length_penalty * (1.0 - len_ratio);

    let base = (sequence * weights.sequence
        + word_overlap * weights.word_overlap
        + exact_word
        + synonym_score * weights.synonym
        + category_bonus)
        * length_penalty;

    // Factor 7: Specificity penalty — specific subcategories score lower
    // against generic queries.
    let subcategory = target.subcategory.trim().to_lowercase();
    let penalized = if GENERIC_SUBCATEGORIES.contains(&subcategory.as_str()) {
        base
    } else {
        base - weights.specificity_penalty
    };

    penalized.clamp(0.0, 1.0)
}

fn synonym_cross_match(source: &SourceTerm, target: &TargetEntry, target_label: &str) -> f64 {
    let mut best: f64 = 0.0;

    for synonym in source.synonyms.iter().take(SYNONYMS_CONSIDERED) {
        let synonym = synonym.trim().to_lowercase();
        if synonym.is_empty() {
            continue;
        }
        if synonym == target_label || target_label.contains(&synonym) {
            best = best.max(SYNONYM_LABEL_CAP);
        }
        for target_synonym in &target.synonyms {
            let target_synonym = target_synonym.trim().to_lowercase();
            if target_synonym.is_empty() {
                continue;
            }
            let sim = normalized_levenshtein(&synonym, &target_synonym);
            best = best.max(sim * SYNONYM_SYNONYM_DAMPING);
        }
    }

    best
}

/// One cross-ranked candidate with its display confidence and quality.
#[derive(Debug, Clone, Serialize)]
pub struct CrossRanked {
    pub entry: TargetEntry,
    /// Aggregated confidence, rounded to two decimals for display.
    pub confidence: f64,
    pub quality: MappingQuality,
}

/// Score every candidate against the anchor term and sort descending.
pub fn cross_rank(
    source: &SourceTerm,
    candidates: &[TargetEntry],
    weights: &AggregatorWeights,
) -> Vec<CrossRanked> {
    let mut ranked: Vec<CrossRanked> = candidates
        .iter()
        .map(|entry| {
            let score = aggregate(source, entry, weights);
            CrossRanked {
                entry: entry.clone(),
                confidence: (score * 100.0).round() / 100.0,
                quality: MappingQuality::from_score(score),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}
