//! MappingEngine: orchestrates the full term-mapping pipeline.
//!
//! CacheCheck → QueryExpansion → CandidateCollection (parallel fan-out,
//! order-preserving join) → Dedup → Scoring/Filtering → Ranking →
//! Classification → CacheStore.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use termbridge_core::config::MappingConfig;
use termbridge_core::errors::{SearchError, TermBridgeError, TermBridgeResult};
use termbridge_core::models::{
    BulkMappingReport, Confidence, MappingMethod, MappingResult, SourceTerm, TargetEntry,
};
use termbridge_core::traits::{IClassificationSearch, IMappingCache, ITermRegistry};

use crate::expansion;
use crate::ranking;

/// The main mapping engine. Fans expansion queries out to the
/// classification-search collaborator, scores and ranks the merged
/// candidates, classifies the outcome, and memoizes the result.
///
/// Failure paths produce the same result shape as success paths; callers
/// discriminate on `method` only. Dropping an in-flight `map_term` future
/// aborts its expansion queries without writing a partial cache entry.
pub struct MappingEngine<S, R>
where
    S: IClassificationSearch + 'static,
    R: ITermRegistry,
{
    search: Arc<S>,
    registry: Arc<R>,
    cache: Arc<dyn IMappingCache>,
    config: MappingConfig,
}

impl<S, R> MappingEngine<S, R>
where
    S: IClassificationSearch + 'static,
    R: ITermRegistry,
{
    pub fn new(
        search: Arc<S>,
        registry: Arc<R>,
        cache: Arc<dyn IMappingCache>,
        config: MappingConfig,
    ) -> Self {
        Self {
            search,
            registry,
            cache,
            config,
        }
    }

    /// Map one source term to ranked classification candidates.
    ///
    /// Never fails: any unanticipated pipeline error is converted here, at
    /// the outermost boundary, into a zero-confidence `system_error` result.
    pub async fn map_term(&self, term: &SourceTerm) -> MappingResult {
        if let Some(hit) = self.cache.get(&term.id) {
            info!(term_id = %term.id, "cache hit for mapping");
            return hit;
        }

        info!(term_id = %term.id, label = %term.label, "mapping term");

        match self.run_pipeline(term).await {
            Ok(result) => result,
            Err(err) => {
                error!(term_id = %term.id, %err, "system error while mapping");
                MappingResult::empty(term.clone(), MappingMethod::SystemError)
            }
        }
    }

    /// Resolve a term id through the registry, then map it.
    ///
    /// An id the registry cannot resolve is an explicit `TermNotFound`
    /// error, never an empty mapping.
    pub async fn map_term_id(&self, term_id: &str) -> TermBridgeResult<MappingResult> {
        let resolved = self.registry.lookup(term_id, None).await?;
        let term = resolved
            .into_iter()
            .next()
            .ok_or_else(|| TermBridgeError::TermNotFound {
                id: term_id.to_string(),
            })?;

        Ok(self.map_term(&term).await)
    }

    /// Bulk entry point: map up to `bulk_limit` term ids.
    ///
    /// The cap is checked before any upstream lookup. Ids the registry
    /// cannot resolve are skipped with a warning rather than failing the
    /// batch. Resolved terms are mapped concurrently.
    pub async fn map_terms(&self, term_ids: &[String]) -> TermBridgeResult<BulkMappingReport> {
        if term_ids.len() > self.config.bulk_limit {
            return Err(TermBridgeError::BulkLimitExceeded {
                requested: term_ids.len(),
                limit: self.config.bulk_limit,
            });
        }

        let mut terms = Vec::with_capacity(term_ids.len());
        for term_id in term_ids {
            let resolved = self.registry.lookup(term_id, None).await?;
            match resolved.into_iter().next() {
                Some(term) => terms.push(term),
                None => warn!(%term_id, "term not found in registry, skipping in bulk mapping"),
            }
        }

        let results = join_all(terms.iter().map(|term| self.map_term(term))).await;

        Ok(BulkMappingReport::from_results(results))
    }

    async fn run_pipeline(&self, term: &SourceTerm) -> TermBridgeResult<MappingResult> {
        // Query expansion: label first, then synonyms, fixed order.
        let queries = expansion::expand_queries(term, self.config.max_synonym_queries);

        // Candidate collection: parallel fan-out, merged in issuance order.
        let (batches, any_query_failed) = self.collect_candidates(&queries).await?;

        let collected: usize = batches.iter().map(Vec::len).sum();
        debug!(term_id = %term.id, queries = queries.len(), collected, "candidates collected");

        // Dedup: first occurrence of a code wins.
        let unique = ranking::dedup_by_code(batches);

        // Scoring + inclusive threshold filter.
        let scored = ranking::score_and_filter(
            term,
            unique,
            self.config.score_threshold,
            self.config.synonym_damping,
        );
        let any_survivor = !scored.is_empty();

        // Ranking: descending, top-k.
        let ranked = ranking::rank(scored, self.config.max_matches);

        let confidence = ranked
            .first()
            .map(|c| Confidence::new(c.score))
            .unwrap_or_default();
        let method = MappingMethod::classify(confidence, any_query_failed, any_survivor);

        let result = MappingResult {
            source_term: term.clone(),
            matches: ranked.into_iter().map(|c| c.entry).collect(),
            confidence,
            method,
            created_at: Utc::now(),
        };

        info!(
            term_id = %term.id,
            matches = result.matches.len(),
            %confidence,
            method = %method,
            "mapping complete"
        );

        // Unconditional overwrite; racing invocations are last-write-wins.
        self.cache.put(&term.id, result.clone());

        Ok(result)
    }

    /// Issue every expansion query as its own task, bounded by the
    /// per-query timeout, and join results back into issuance-order slots.
    ///
    /// A failed or timed-out query contributes an empty batch and sets the
    /// error flag; it never aborts its siblings.
    async fn collect_candidates(
        &self,
        queries: &[String],
    ) -> TermBridgeResult<(Vec<Vec<TargetEntry>>, bool)> {
        let timeout = Duration::from_millis(self.config.search_timeout_ms);
        let mut tasks: JoinSet<(usize, String, TermBridgeResult<Vec<TargetEntry>>)> =
            JoinSet::new();

        for (position, query) in queries.iter().enumerate() {
            let search = Arc::clone(&self.search);
            let query = query.clone();
            let timeout_ms = self.config.search_timeout_ms;
            tasks.spawn(async move {
                let outcome = match tokio::time::timeout(timeout, search.search(&query)).await {
                    Ok(result) => result,
                    Err(_) => Err(SearchError::Timeout {
                        query: query.clone(),
                        timeout_ms,
                    }
                    .into()),
                };
                (position, query, outcome)
            });
        }

        // Slots are keyed by query position, never completion order.
        let mut batches: Vec<Vec<TargetEntry>> = vec![Vec::new(); queries.len()];
        let mut any_query_failed = false;

        while let Some(joined) = tasks.join_next().await {
            let (position, query, outcome) =
                joined.map_err(|err| TermBridgeError::Internal {
                    reason: format!("search task join failure: {err}"),
                })?;

            match outcome {
                Ok(entries) => {
                    debug!(%query, results = entries.len(), "expansion query completed");
                    batches[position] = entries;
                }
                Err(err) => {
                    warn!(%query, %err, "expansion query failed");
                    any_query_failed = true;
                }
            }
        }

        Ok((batches, any_query_failed))
    }
}
