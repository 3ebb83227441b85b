//! Error taxonomy for the mapping system.
//!
//! One subsystem enum ([`SearchError`]) plus a top-level aggregate with
//! `#[from]` conversions. Stages thread `TermBridgeResult` through with `?`;
//! only the outermost engine boundary converts an unclassified failure into
//! a `system_error`-shaped [`crate::models::MappingResult`].

pub mod search_error;

pub use search_error::SearchError;

/// Top-level error for termbridge operations.
#[derive(Debug, thiserror::Error)]
pub enum TermBridgeError {
    /// The registry resolved nothing for the requested term. Surfaced
    /// explicitly to callers, never silently mapped to an empty result.
    #[error("source term not found: {id}")]
    TermNotFound { id: String },

    #[error("bulk mapping limit exceeded: requested {requested}, limit {limit}")]
    BulkLimitExceeded { requested: usize, limit: usize },

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {reason}")]
    Internal { reason: String },
}

/// Convenience alias used across the workspace.
pub type TermBridgeResult<T> = Result<T, TermBridgeError>;
