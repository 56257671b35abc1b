//! Scoring configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::{parse_f64_from_env, parse_usize_from_env};
use crate::constants::{
    DEFAULT_BRAND_WEIGHT, DEFAULT_CANDIDATE_LIMIT, DEFAULT_EXCELLENT_THRESHOLD,
    DEFAULT_GOOD_THRESHOLD, DEFAULT_MAX_RESULTS, DEFAULT_MIN_BRAND_SCORE,
    DEFAULT_MIN_MODEL_SCORE, DEFAULT_MODEL_WEIGHT, DEFAULT_PHYSICAL_WEIGHT,
    DEFAULT_POOR_THRESHOLD, DEFAULT_POSSIBLE_THRESHOLD, DEFAULT_REFERENCE_WEIGHT,
    DEFAULT_RETRIEVAL_BRAND_FLOOR, WEIGHT_SUM_TOLERANCE,
};

/// Weight of each component in the overall match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub brand: f64,
    pub model: f64,
    pub reference: f64,
    pub physical: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND_WEIGHT,
            model: DEFAULT_MODEL_WEIGHT,
            reference: DEFAULT_REFERENCE_WEIGHT,
            physical: DEFAULT_PHYSICAL_WEIGHT,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.brand + self.model + self.reference + self.physical
    }

    /// Weights must be finite, non-negative, and sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("brand", self.brand),
            ("model", self.model),
            ("reference", self.reference),
            ("physical", self.physical),
        ];
        for (name, weight) in all {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeights {
                    reason: format!("{} weight must be a non-negative number, got {}", name, weight),
                });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights {
                reason: format!("weights must sum to 1.0, got {:.4}", sum),
            });
        }
        Ok(())
    }
}

/// Minimum match score for each confidence tier, on `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    pub excellent: f64,
    pub good: f64,
    pub possible: f64,
    pub poor: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            excellent: DEFAULT_EXCELLENT_THRESHOLD,
            good: DEFAULT_GOOD_THRESHOLD,
            possible: DEFAULT_POSSIBLE_THRESHOLD,
            poor: DEFAULT_POOR_THRESHOLD,
        }
    }
}

impl ConfidenceThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = [self.excellent, self.good, self.possible, self.poor];

        if ordered.iter().any(|t| !(0.0..=100.0).contains(t)) {
            return Err(ConfigError::InvalidThresholds {
                reason: format!("thresholds must lie within [0, 100], got {:?}", ordered),
            });
        }
        if ordered.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(ConfigError::InvalidThresholds {
                reason: format!(
                    "thresholds must be ordered excellent >= good >= possible >= poor, got {:?}",
                    ordered
                ),
            });
        }
        Ok(())
    }
}

/// Minimum similarities a candidate needs to be considered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityFloors {
    /// Approximate brand similarity the library must meet when retrieving, on `[0, 1]`.
    pub retrieval_brand: f64,
    /// Brand component score required by in-core gating, on `[0, 100]`.
    pub brand: f64,
    /// Model component score required by in-core gating, on `[0, 100]`.
    pub model: f64,
}

impl Default for SimilarityFloors {
    fn default() -> Self {
        Self {
            retrieval_brand: DEFAULT_RETRIEVAL_BRAND_FLOOR,
            brand: DEFAULT_MIN_BRAND_SCORE,
            model: DEFAULT_MIN_MODEL_SCORE,
        }
    }
}

impl SimilarityFloors {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("retrieval_brand", self.retrieval_brand, 1.0),
            ("brand", self.brand, 100.0),
            ("model", self.model, 100.0),
        ];
        for (name, value, max) in checks {
            if !(0.0..=max).contains(&value) {
                return Err(ConfigError::InvalidFloor { name, value, max });
            }
        }
        Ok(())
    }
}

/// Immutable scoring configuration threaded through every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub weights: MatchWeights,
    pub thresholds: ConfidenceThresholds,
    pub floors: SimilarityFloors,
    /// Maximum number of ranked results returned. Default: `5`.
    pub max_results: usize,
    /// Maximum number of candidates requested from the library. Default: `50`.
    pub candidate_limit: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            thresholds: ConfidenceThresholds::default(),
            floors: SimilarityFloors::default(),
            max_results: DEFAULT_MAX_RESULTS,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }
}

impl MatchingConfig {
    const ENV_WEIGHT_BRAND: &'static str = "LOUPE_WEIGHT_BRAND";
    const ENV_WEIGHT_MODEL: &'static str = "LOUPE_WEIGHT_MODEL";
    const ENV_WEIGHT_REFERENCE: &'static str = "LOUPE_WEIGHT_REFERENCE";
    const ENV_WEIGHT_PHYSICAL: &'static str = "LOUPE_WEIGHT_PHYSICAL";
    const ENV_TIER_EXCELLENT: &'static str = "LOUPE_TIER_EXCELLENT";
    const ENV_TIER_GOOD: &'static str = "LOUPE_TIER_GOOD";
    const ENV_TIER_POSSIBLE: &'static str = "LOUPE_TIER_POSSIBLE";
    const ENV_TIER_POOR: &'static str = "LOUPE_TIER_POOR";
    const ENV_RETRIEVAL_BRAND_FLOOR: &'static str = "LOUPE_RETRIEVAL_BRAND_FLOOR";
    const ENV_MIN_BRAND_SCORE: &'static str = "LOUPE_MIN_BRAND_SCORE";
    const ENV_MIN_MODEL_SCORE: &'static str = "LOUPE_MIN_MODEL_SCORE";
    const ENV_MAX_RESULTS: &'static str = "LOUPE_MAX_RESULTS";
    const ENV_CANDIDATE_LIMIT: &'static str = "LOUPE_CANDIDATE_LIMIT";

    /// Loads `LOUPE_*` overrides on top of defaults and validates the result.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let weights = MatchWeights {
            brand: parse_f64_from_env(Self::ENV_WEIGHT_BRAND, defaults.weights.brand)?,
            model: parse_f64_from_env(Self::ENV_WEIGHT_MODEL, defaults.weights.model)?,
            reference: parse_f64_from_env(Self::ENV_WEIGHT_REFERENCE, defaults.weights.reference)?,
            physical: parse_f64_from_env(Self::ENV_WEIGHT_PHYSICAL, defaults.weights.physical)?,
        };

        let thresholds = ConfidenceThresholds {
            excellent: parse_f64_from_env(Self::ENV_TIER_EXCELLENT, defaults.thresholds.excellent)?,
            good: parse_f64_from_env(Self::ENV_TIER_GOOD, defaults.thresholds.good)?,
            possible: parse_f64_from_env(Self::ENV_TIER_POSSIBLE, defaults.thresholds.possible)?,
            poor: parse_f64_from_env(Self::ENV_TIER_POOR, defaults.thresholds.poor)?,
        };

        let floors = SimilarityFloors {
            retrieval_brand: parse_f64_from_env(
                Self::ENV_RETRIEVAL_BRAND_FLOOR,
                defaults.floors.retrieval_brand,
            )?,
            brand: parse_f64_from_env(Self::ENV_MIN_BRAND_SCORE, defaults.floors.brand)?,
            model: parse_f64_from_env(Self::ENV_MIN_MODEL_SCORE, defaults.floors.model)?,
        };

        let config = Self {
            weights,
            thresholds,
            floors,
            max_results: parse_usize_from_env(Self::ENV_MAX_RESULTS, defaults.max_results)?,
            candidate_limit: parse_usize_from_env(
                Self::ENV_CANDIDATE_LIMIT,
                defaults.candidate_limit,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn with_weights(mut self, weights: MatchWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_thresholds(mut self, thresholds: ConfidenceThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_floors(mut self, floors: SimilarityFloors) -> Self {
        self.floors = floors;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_candidate_limit(mut self, candidate_limit: usize) -> Self {
        self.candidate_limit = candidate_limit;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.thresholds.validate()?;
        self.floors.validate()?;

        if self.max_results == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "max_results",
            });
        }
        if self.candidate_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "candidate_limit",
            });
        }
        Ok(())
    }
}
