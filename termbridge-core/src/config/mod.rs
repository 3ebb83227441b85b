//! Mapping subsystem configuration.
//!
//! `#[serde(default)]` structs backed by the constants in [`defaults`], so a
//! partial TOML override only touches the named fields.

pub mod defaults;

use serde::{Deserialize, Serialize};

/// Mapping engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Minimum candidate score retained by the filter (inclusive).
    pub score_threshold: f64,
    /// Maximum entries kept in a mapping result.
    pub max_matches: usize,
    /// Maximum synonym queries issued per expansion (besides the label).
    pub max_synonym_queries: usize,
    /// Damping applied to synonym-to-synonym similarity hits.
    pub synonym_damping: f64,
    /// Per-query timeout for classification search calls.
    pub search_timeout_ms: u64,
    /// Maximum term count accepted by a bulk mapping request.
    pub bulk_limit: usize,
    /// Maximum entries held by the in-process result cache.
    pub cache_capacity: u64,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            score_threshold: defaults::DEFAULT_SCORE_THRESHOLD,
            max_matches: defaults::DEFAULT_MAX_MATCHES,
            max_synonym_queries: defaults::DEFAULT_MAX_SYNONYM_QUERIES,
            synonym_damping: defaults::DEFAULT_SYNONYM_DAMPING,
            search_timeout_ms: defaults::DEFAULT_SEARCH_TIMEOUT_MS,
            bulk_limit: defaults::DEFAULT_BULK_LIMIT,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl MappingConfig {
    /// Parse a TOML override. Missing fields fall back to defaults.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
