use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::config::MatchingConfig;
use crate::library::{ComparisonRecord, ComparisonStore, ReferenceLibrary};
use crate::model::WatchDescription;
use crate::ranking::rank_matches;

use super::engine::MatchEngine;
use super::error::MatchError;
use super::types::{MatchOutcome, MatchResult};

/// Full pipeline: retrieval, gating, scoring, discrepancy analysis, ranking and best-match
/// persistence.
///
/// Retrieval failures fail the run. Persistence is best effort: a failed save is logged and
/// reported through [`MatchOutcome::comparison_persisted`], and the results are still returned.
pub struct MatchOrchestrator<L, S>
where
    L: ReferenceLibrary,
    S: ComparisonStore,
{
    library: L,
    store: S,
    engine: Arc<MatchEngine>,
}

impl<L, S> std::fmt::Debug for MatchOrchestrator<L, S>
where
    L: ReferenceLibrary,
    S: ComparisonStore,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchOrchestrator")
            .field("config", self.engine.config())
            .finish_non_exhaustive()
    }
}

impl<L, S> MatchOrchestrator<L, S>
where
    L: ReferenceLibrary,
    S: ComparisonStore,
{
    pub fn new(library: L, store: S, config: MatchingConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            library,
            store,
            engine: Arc::new(MatchEngine::new(config)),
        })
    }

    pub fn config(&self) -> &MatchingConfig {
        self.engine.config()
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn find_matches(
        &self,
        description: WatchDescription,
    ) -> Result<MatchOutcome, MatchError> {
        self.find_matches_with_cancel(description, CancellationToken::new())
            .await
    }

    #[instrument(skip(self, description, cancel), fields(brand = description.brand().unwrap_or_default()))]
    pub async fn find_matches_with_cancel(
        &self,
        description: WatchDescription,
        cancel: CancellationToken,
    ) -> Result<MatchOutcome, MatchError> {
        description
            .validate()
            .map_err(|e| MatchError::InvalidInput { reason: e.to_string() })?;

        if cancel.is_cancelled() {
            return Err(MatchError::Cancelled);
        }

        let config = self.config();
        let brand = description.brand().unwrap_or_default().to_string();

        let candidates = tokio::select! {
            _ = cancel.cancelled() => return Err(MatchError::Cancelled),
            found = self.library.find_candidates(
                &brand,
                config.floors.retrieval_brand,
                config.candidate_limit,
            ) => found?,
        };
        let candidates_retrieved = candidates.len();
        debug!(candidates_retrieved, "Candidates retrieved");

        let description = Arc::new(description);
        let results = {
            let engine = Arc::clone(&self.engine);
            let description = Arc::clone(&description);
            let cancel = cancel.clone();
            tokio::task::spawn_blocking(move || engine.evaluate(&description, &candidates, &cancel))
                .await
                .map_err(|e| MatchError::ScoringTaskFailed {
                    reason: e.to_string(),
                })??
        };
        let candidates_accepted = results.len();

        let results = rank_matches(results, config.max_results);

        if cancel.is_cancelled() {
            return Err(MatchError::Cancelled);
        }

        let comparison_persisted = match results.first() {
            Some(best) => self.persist_best(&description, best).await,
            None => false,
        };

        let outcome = MatchOutcome {
            results,
            candidates_retrieved,
            candidates_accepted,
            comparison_persisted,
        };

        info!(
            status = %outcome.status(),
            candidates_retrieved,
            candidates_accepted,
            returned = outcome.results.len(),
            best_score = outcome.best().map(|b| b.match_score),
            best_reference = outcome.best().map(|b| b.reference.id.as_str()),
            comparison_persisted,
            "Matching complete"
        );

        Ok(outcome)
    }

    async fn persist_best(&self, description: &WatchDescription, best: &MatchResult) -> bool {
        let record = match ComparisonRecord::new(description, best) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, reference_id = %best.reference.id, "Failed to build comparison record");
                return false;
            }
        };

        match self.store.save_comparison(record).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, reference_id = %best.reference.id, "Failed to persist comparison record");
                false
            }
        }
    }
}
