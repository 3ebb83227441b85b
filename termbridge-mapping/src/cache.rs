//! In-process mapping-result cache backed by moka.
//!
//! No TTL: term and classification data are assumed stable for the lifetime
//! of a cached result, and nothing invalidates entries when upstream data
//! changes. Capacity-bound eviction only.

use moka::sync::Cache;

use termbridge_core::models::MappingResult;
use termbridge_core::traits::IMappingCache;

/// Shared in-memory memoization store keyed by source-term id.
pub struct MemoryMappingCache {
    cache: Cache<String, MappingResult>,
}

impl MemoryMappingCache {
    /// Create a cache bounded to `capacity` entries.
    pub fn new(capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(capacity).build();
        Self { cache }
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl IMappingCache for MemoryMappingCache {
    fn get(&self, term_id: &str) -> Option<MappingResult> {
        self.cache.get(term_id)
    }

    fn put(&self, term_id: &str, result: MappingResult) {
        self.cache.insert(term_id.to_string(), result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termbridge_core::models::{MappingMethod, SourceTerm};

    fn result(id: &str, method: MappingMethod) -> MappingResult {
        MappingResult::empty(SourceTerm::new(id, "Jwara", "Ayurveda"), method)
    }

    #[test]
    fn put_then_get_returns_result() {
        let cache = MemoryMappingCache::new(100);
        cache.put("AYU001", result("AYU001", MappingMethod::NoResults));
        let hit = cache.get("AYU001").expect("cached result");
        assert_eq!(hit.method, MappingMethod::NoResults);
    }

    #[test]
    fn miss_returns_none() {
        let cache = MemoryMappingCache::new(100);
        assert!(cache.get("nonexistent").is_none());
    }

    #[test]
    fn put_overwrites_unconditionally() {
        let cache = MemoryMappingCache::new(100);
        cache.put("AYU001", result("AYU001", MappingMethod::NoResults));
        cache.put("AYU001", result("AYU001", MappingMethod::ExactMatch));
        assert_eq!(cache.get("AYU001").unwrap().method, MappingMethod::ExactMatch);
    }

    #[test]
    fn clear_empties_cache() {
        let cache = MemoryMappingCache::new(100);
        cache.put("a", result("a", MappingMethod::NoResults));
        cache.clear();
        assert!(cache.get("a").is_none());
    }
}
