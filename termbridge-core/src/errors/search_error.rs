/// Per-query classification-search failures.
///
/// These are non-fatal to an orchestration: the engine logs them, flags
/// the run, and continues with the remaining expansion queries.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("upstream classification search failed: {reason}")]
    Upstream { reason: String },

    #[error("search for '{query}' timed out after {timeout_ms}ms")]
    Timeout { query: String, timeout_ms: u64 },
}
