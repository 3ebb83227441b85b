use serde::{Deserialize, Serialize};
use std::fmt;

/// Display bucket for the side-by-side cross-ranking path.
///
/// Distinct from [`super::MappingMethod`]: these labels annotate
/// individually cross-scored candidates in search output and never feed
/// the orchestrator's classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingQuality {
    Excellent,
    High,
    Medium,
    Low,
    Poor,
}

impl MappingQuality {
    /// Bucket a cross-ranking confidence score.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.85 {
            Self::Excellent
        } else if score >= 0.65 {
            Self::High
        } else if score >= 0.45 {
            Self::Medium
        } else if score >= 0.25 {
            Self::Low
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for MappingQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Excellent => "excellent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Poor => "poor",
        };
        f.write_str(s)
    }
}
