use rayon::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::MatchingConfig;
use crate::discrepancy::analyze_discrepancies;
use crate::model::{ReferenceWatch, WatchDescription};
use crate::scoring::{CandidateFilter, MatchScorer, meets_minimum_criteria};

use super::error::MatchError;
use super::types::MatchResult;

/// Synchronous, CPU-bound half of the pipeline: gating, scoring and discrepancy analysis.
///
/// Holds no mutable state; the same inputs always produce the same output.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchingConfig,
}

impl MatchEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Gates, scores and explains one candidate. `None` means it was rejected.
    pub fn evaluate_candidate(
        &self,
        description: &WatchDescription,
        candidate: &ReferenceWatch,
    ) -> Option<MatchResult> {
        let decision = CandidateFilter::new(&self.config).evaluate(description, candidate);
        if !decision.is_accepted() {
            debug!(reference_id = %candidate.id, %decision, "Candidate gated");
            return None;
        }

        let score = MatchScorer::new(&self.config).score(description, candidate);
        if !meets_minimum_criteria(
            score.components.brand,
            score.components.model,
            &self.config,
        ) {
            debug!(
                reference_id = %candidate.id,
                match_score = score.match_score,
                "Candidate rejected after scoring"
            );
            return None;
        }

        Some(MatchResult {
            reference: candidate.clone(),
            match_score: score.match_score,
            components: score.components,
            confidence: score.confidence,
            discrepancies: analyze_discrepancies(description, candidate),
        })
    }

    /// Evaluates every candidate in parallel, keeping input order.
    ///
    /// `cancel` is checked before each candidate; once it fires the whole run returns
    /// [`MatchError::Cancelled`] and no partial results escape.
    pub fn evaluate(
        &self,
        description: &WatchDescription,
        candidates: &[ReferenceWatch],
        cancel: &CancellationToken,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let evaluated: Vec<Option<MatchResult>> = candidates
            .par_iter()
            .map(|candidate| {
                if cancel.is_cancelled() {
                    return Err(MatchError::Cancelled);
                }
                Ok(self.evaluate_candidate(description, candidate))
            })
            .collect::<Result<_, _>>()?;

        Ok(evaluated.into_iter().flatten().collect())
    }
}
