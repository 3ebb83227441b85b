use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::confidence::Confidence;
use super::source_term::SourceTerm;
use super::target_entry::TargetEntry;

/// Categorical mapping-quality bucket for a completed mapping.
///
/// Serialized snake_case so downstream consumers see the wire names
/// (`exact_match`, `search_failed`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingMethod {
    /// Top score >= 0.9.
    ExactMatch,
    /// Top score >= 0.7.
    HighConfidence,
    /// Top score >= 0.5.
    PartialMatch,
    /// Top score >= 0.3.
    FuzzyMatch,
    /// Survivors exist but the top score is below the retention floor.
    /// Unreachable given the filter; kept as a defensive branch.
    NoMatchAboveThreshold,
    /// No candidate survived and no expansion query failed.
    NoResults,
    /// No candidate survived and at least one expansion query failed.
    SearchFailed,
    /// Unanticipated failure, converted once at the outer boundary.
    SystemError,
}

impl MappingMethod {
    /// Classify a completed pipeline run. Pure function of the top surviving
    /// confidence, whether any expansion query failed, and whether any
    /// candidate survived the threshold filter.
    pub fn classify(confidence: Confidence, any_query_failed: bool, any_survivor: bool) -> Self {
        if !any_survivor {
            return if any_query_failed {
                Self::SearchFailed
            } else {
                Self::NoResults
            };
        }
        let c = confidence.value();
        if c < Confidence::FLOOR {
            Self::NoMatchAboveThreshold
        } else if c >= Confidence::EXACT {
            Self::ExactMatch
        } else if c >= Confidence::HIGH {
            Self::HighConfidence
        } else if c >= Confidence::PARTIAL {
            Self::PartialMatch
        } else {
            Self::FuzzyMatch
        }
    }

    /// Wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExactMatch => "exact_match",
            Self::HighConfidence => "high_confidence",
            Self::PartialMatch => "partial_match",
            Self::FuzzyMatch => "fuzzy_match",
            Self::NoMatchAboveThreshold => "no_match_above_threshold",
            Self::NoResults => "no_results",
            Self::SearchFailed => "search_failed",
            Self::SystemError => "system_error",
        }
    }
}

impl fmt::Display for MappingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of mapping one source term against the classification.
///
/// Invariants: `matches` is sorted non-increasing by the score that ranked
/// it and holds at most the configured maximum; `confidence` equals the
/// score of `matches[0]` when non-empty, else 0.0. Failure paths produce
/// the same shape as success paths — consumers discriminate only on
/// `method`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    pub source_term: SourceTerm,
    pub matches: Vec<TargetEntry>,
    pub confidence: Confidence,
    pub method: MappingMethod,
    pub created_at: DateTime<Utc>,
}

impl MappingResult {
    /// A zero-confidence, empty-matches result for the given failure bucket.
    pub fn empty(source_term: SourceTerm, method: MappingMethod) -> Self {
        Self {
            source_term,
            matches: Vec::new(),
            confidence: Confidence::zero(),
            method,
            created_at: Utc::now(),
        }
    }
}
