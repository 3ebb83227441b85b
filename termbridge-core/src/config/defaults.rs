// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_SYNONYM_DAMPING: f64 = 0.95;

// --- Ranking ---
pub const DEFAULT_MAX_MATCHES: usize = 5;

// --- Query expansion ---
pub const DEFAULT_MAX_SYNONYM_QUERIES: usize = 3;

// --- Search fan-out ---
pub const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 10_000;

// --- Bulk mapping ---
pub const DEFAULT_BULK_LIMIT: usize = 10;

// --- Cache ---
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
