use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::{MatchWeights, MatchingConfig};
use crate::model::{ReferenceWatch, WatchDescription};
use crate::similarity::{SimilarityMode, optional_string_score};

use super::confidence::{ConfidenceTier, confidence_tier};
use super::physical::compare_physical_attributes;

/// Per-component scores, each on `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub brand: f64,
    pub model: f64,
    pub reference: f64,
    pub physical: f64,
}

impl ComponentScores {
    /// Weighted sum of the components, clamped to `[0, 100]`.
    pub fn weighted_total(&self, weights: &MatchWeights) -> f64 {
        let total = self.brand * weights.brand
            + self.model * weights.model
            + self.reference * weights.reference
            + self.physical * weights.physical;
        total.clamp(0.0, 100.0)
    }
}

/// Scored candidate before discrepancy analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    pub components: ComponentScores,
    pub match_score: f64,
    pub confidence: ConfidenceTier,
}

/// Brand agreement on `[0, 100]`, Jaro-Winkler.
pub fn brand_score(description: &WatchDescription, reference: &ReferenceWatch) -> f64 {
    optional_string_score(
        description.brand(),
        reference.brand(),
        SimilarityMode::JaroWinkler,
    ) * 100.0
}

/// Model agreement on `[0, 100]`, Jaro-Winkler.
pub fn model_score(description: &WatchDescription, reference: &ReferenceWatch) -> f64 {
    optional_string_score(
        description.model(),
        reference.model(),
        SimilarityMode::JaroWinkler,
    ) * 100.0
}

/// Reference-number agreement on `[0, 100]`, Levenshtein. Absent on either side scores `0`.
pub fn reference_score(description: &WatchDescription, reference: &ReferenceWatch) -> f64 {
    optional_string_score(
        description.identity.reference_number.as_deref(),
        reference.identity.reference_number.as_deref(),
        SimilarityMode::Levenshtein,
    ) * 100.0
}

/// Physical agreement on `[0, 100]`.
pub fn physical_score(description: &WatchDescription, reference: &ReferenceWatch) -> f64 {
    compare_physical_attributes(&description.physical, &reference.physical).similarity * 100.0
}

/// Weighted scorer bound to one [`MatchingConfig`].
#[derive(Debug, Clone, Copy)]
pub struct MatchScorer<'a> {
    config: &'a MatchingConfig,
}

impl<'a> MatchScorer<'a> {
    pub fn new(config: &'a MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        self.config
    }

    pub fn components(&self, description: &WatchDescription, reference: &ReferenceWatch) -> ComponentScores {
        ComponentScores {
            brand: brand_score(description, reference),
            model: model_score(description, reference),
            reference: reference_score(description, reference),
            physical: physical_score(description, reference),
        }
    }

    pub fn score(&self, description: &WatchDescription, reference: &ReferenceWatch) -> MatchScore {
        let components = self.components(description, reference);
        let match_score = components.weighted_total(&self.config.weights);
        let confidence = confidence_tier(match_score, &self.config.thresholds);

        trace!(
            reference_id = %reference.id,
            brand = components.brand,
            model = components.model,
            reference = components.reference,
            physical = components.physical,
            match_score,
            %confidence,
            "Scored candidate"
        );

        MatchScore {
            components,
            match_score,
            confidence,
        }
    }
}
