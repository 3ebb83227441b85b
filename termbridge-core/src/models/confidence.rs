use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence score clamped to [0.0, 1.0].
/// Represents how confident the engine is that a mapping is correct.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Exact-match threshold.
    pub const EXACT: f64 = 0.9;
    /// High-confidence threshold.
    pub const HIGH: f64 = 0.7;
    /// Partial-match threshold.
    pub const PARTIAL: f64 = 0.5;
    /// Retention floor — candidates scoring below this are discarded.
    pub const FLOOR: f64 = 0.3;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// The zero-confidence value used by every failure-shaped result.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this confidence clears the retention floor.
    pub fn above_floor(self) -> bool {
        self.0 >= Self::FLOOR
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
