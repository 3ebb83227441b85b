use crate::models::MappingResult;

/// Memoization store for completed mapping results, keyed by source-term id.
///
/// An explicit injected abstraction rather than process-global state, so
/// tests substitute isolated instances. Writes overwrite unconditionally;
/// racing pipelines for the same id are last-write-wins, and a stored value
/// is always a complete [`MappingResult`].
pub trait IMappingCache: Send + Sync {
    fn get(&self, term_id: &str) -> Option<MappingResult>;
    fn put(&self, term_id: &str, result: MappingResult);
}
