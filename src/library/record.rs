use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::discrepancy::FieldDiscrepancy;
use crate::hashing::hash_description;
use crate::matcher::MatchResult;
use crate::model::WatchDescription;
use crate::scoring::{ComponentScores, ConfidenceTier};

use super::error::LibraryResult;

/// Best-match payload handed to a [`ComparisonStore`](super::ComparisonStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub id: Uuid,
    pub reference_id: String,
    /// Description exactly as submitted.
    pub description: WatchDescription,
    /// BLAKE3 fingerprint of `description`.
    pub description_hash: String,
    pub components: ComponentScores,
    pub match_score: f64,
    pub confidence: ConfidenceTier,
    pub discrepancies: Vec<FieldDiscrepancy>,
    pub created_at: DateTime<Utc>,
}

impl ComparisonRecord {
    pub fn new(description: &WatchDescription, best: &MatchResult) -> LibraryResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            reference_id: best.reference.id.clone(),
            description: description.clone(),
            description_hash: hash_description(description)?,
            components: best.components,
            match_score: best.match_score,
            confidence: best.confidence,
            discrepancies: best.discrepancies.clone(),
            created_at: Utc::now(),
        })
    }
}
