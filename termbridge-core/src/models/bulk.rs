use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::mapping_result::{MappingMethod, MappingResult};

/// Aggregate outcome of a bulk mapping request.
///
/// `results` is keyed by source-term id. Unresolvable ids are skipped by
/// the engine (with a warning) and simply absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkMappingReport {
    pub total_processed: usize,
    pub results: HashMap<String, MappingResult>,
    /// Histogram over mapping method, keyed by wire name.
    pub summary: HashMap<String, usize>,
}

impl BulkMappingReport {
    /// Build a report from completed per-term results.
    pub fn from_results(results: Vec<MappingResult>) -> Self {
        let total_processed = results.len();
        let mut summary: HashMap<String, usize> = HashMap::new();
        let mut by_id: HashMap<String, MappingResult> = HashMap::new();

        for result in results {
            *summary
                .entry(result.method.as_str().to_string())
                .or_default() += 1;
            by_id.insert(result.source_term.id.clone(), result);
        }

        Self {
            total_processed,
            results: by_id,
            summary,
        }
    }

    /// Count for one method bucket (0 when absent).
    pub fn count(&self, method: MappingMethod) -> usize {
        self.summary.get(method.as_str()).copied().unwrap_or(0)
    }
}
