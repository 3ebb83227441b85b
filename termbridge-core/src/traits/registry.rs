use crate::errors::TermBridgeResult;
use crate::models::SourceTerm;

/// Lookup collaborator for the local traditional-medicine term registry.
///
/// Contract: an empty vec, never an error, when nothing matches.
pub trait ITermRegistry: Send + Sync {
    fn lookup(
        &self,
        query: &str,
        system_filter: Option<&str>,
    ) -> impl std::future::Future<Output = TermBridgeResult<Vec<SourceTerm>>> + Send;
}
