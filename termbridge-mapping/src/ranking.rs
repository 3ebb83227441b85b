//! Candidate dedup, scoring, filtering, and ranking.

use tracing::debug;

use termbridge_core::models::{SourceTerm, TargetEntry};

use crate::similarity::similarity;

/// A target entry paired with the score that ranks it. Exists only during
/// ranking; never persisted or serialized.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub entry: TargetEntry,
    pub score: f64,
}

/// Merge per-query candidate batches in query-issuance order, keeping the
/// first occurrence of each code. Later duplicates are discarded entirely,
/// fields included. Entries without a code are dropped.
pub fn dedup_by_code(batches: Vec<Vec<TargetEntry>>) -> Vec<TargetEntry> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::new();

    for batch in batches {
        for entry in batch {
            if entry.code.is_empty() || !seen.insert(entry.code.clone()) {
                continue;
            }
            unique.push(entry);
        }
    }

    unique
}

/// Score each candidate and drop those below the threshold (inclusive: a
/// score equal to the threshold survives).
///
/// Base score is the similarity of the term label and candidate title; a
/// damped synonym-to-synonym cross-match may override it when stronger.
pub fn score_and_filter(
    term: &SourceTerm,
    candidates: Vec<TargetEntry>,
    threshold: f64,
    synonym_damping: f64,
) -> Vec<ScoredCandidate> {
    let mut scored = Vec::new();

    for entry in candidates {
        let mut score = similarity(&term.label, &entry.title);

        for source_synonym in term.synonyms.iter().filter(|s| !s.trim().is_empty()) {
            for target_synonym in entry.synonyms.iter().filter(|s| !s.trim().is_empty()) {
                let synonym_score = similarity(source_synonym, target_synonym) * synonym_damping;
                score = score.max(synonym_score);
            }
        }

        if score >= threshold {
            debug!(code = %entry.code, title = %entry.title, score, "candidate retained");
            scored.push(ScoredCandidate { entry, score });
        }
    }

    scored
}

/// Sort descending by score (stable for ties) and keep the top `max`.
pub fn rank(mut scored: Vec<ScoredCandidate>, max: usize) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(max);
    scored
}
