use crate::errors::TermBridgeResult;
use crate::models::TargetEntry;

/// Search collaborator for the external biomedical classification.
///
/// Implementations own transport concerns (auth, pagination, endpoint
/// fallback, field enrichment) and convert loose upstream payloads into
/// [`TargetEntry`] before returning.
///
/// Contract: "no results" is `Ok(vec![])`, never an error. `Err` is
/// reserved for genuine transient upstream failures, which the engine
/// converts into a per-query failure.
pub trait IClassificationSearch: Send + Sync {
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = TermBridgeResult<Vec<TargetEntry>>> + Send;
}
