use std::fmt;

use serde::{Deserialize, Serialize};

use crate::discrepancy::{DiscrepancySummary, FieldDiscrepancy, summarize_discrepancies};
use crate::model::ReferenceWatch;
use crate::scoring::{ComponentScores, ConfidenceTier};

/// One accepted candidate with its scores and field-level explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub reference: ReferenceWatch,
    /// Weighted sum of `components`, on `[0, 100]`.
    pub match_score: f64,
    pub components: ComponentScores,
    pub confidence: ConfidenceTier,
    pub discrepancies: Vec<FieldDiscrepancy>,
}

impl MatchResult {
    pub fn summary(&self) -> DiscrepancySummary {
        summarize_discrepancies(&self.discrepancies)
    }

    pub fn has_critical_discrepancy(&self) -> bool {
        self.discrepancies.iter().any(FieldDiscrepancy::is_critical)
    }
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// At least one candidate was accepted.
    Matched,
    /// The library returned nothing.
    NoCandidates,
    /// Candidates were retrieved but none passed gating.
    AllGated,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Matched => write!(f, "MATCHED"),
            MatchStatus::NoCandidates => write!(f, "NO_CANDIDATES"),
            MatchStatus::AllGated => write!(f, "ALL_GATED"),
        }
    }
}

/// Ranked results plus retrieval counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Highest score first, at most `max_results` long.
    pub results: Vec<MatchResult>,
    pub candidates_retrieved: usize,
    /// Candidates that passed gating, before the ranking cap.
    pub candidates_accepted: usize,
    /// Whether the best-match record reached the comparison store.
    pub comparison_persisted: bool,
}

impl MatchOutcome {
    pub fn status(&self) -> MatchStatus {
        if self.candidates_retrieved == 0 {
            MatchStatus::NoCandidates
        } else if self.candidates_accepted == 0 {
            MatchStatus::AllGated
        } else {
            MatchStatus::Matched
        }
    }

    pub fn best(&self) -> Option<&MatchResult> {
        self.results.first()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
