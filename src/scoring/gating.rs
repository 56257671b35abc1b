//! In-core candidate gating.
//!
//! Candidates have already passed the library's approximate brand filter. That metric may
//! differ from [`jaro_winkler_similarity`](crate::similarity::jaro_winkler_similarity), so the
//! brand is rechecked here together with the model.

use std::fmt;

use crate::config::MatchingConfig;
use crate::model::{ReferenceWatch, WatchDescription};

use super::scorer::{brand_score, model_score};

/// Both the brand and the model score (on `[0, 100]`) must reach their floors.
///
/// Brand agreement alone is not enough: it would admit every model of the same maker.
pub fn meets_minimum_criteria(brand_score: f64, model_score: f64, config: &MatchingConfig) -> bool {
    brand_score >= config.floors.brand && model_score >= config.floors.model
}

/// Outcome of gating one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateDecision {
    Accepted { brand_score: f64, model_score: f64 },
    Rejected { brand_score: f64, model_score: f64 },
}

impl GateDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, GateDecision::Accepted { .. })
    }

    pub fn scores(&self) -> (f64, f64) {
        match *self {
            GateDecision::Accepted {
                brand_score,
                model_score,
            }
            | GateDecision::Rejected {
                brand_score,
                model_score,
            } => (brand_score, model_score),
        }
    }
}

impl fmt::Display for GateDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (brand, model) = self.scores();
        let status = if self.is_accepted() {
            "ACCEPTED"
        } else {
            "REJECTED"
        };
        write!(f, "{} (brand: {:.1}, model: {:.1})", status, brand, model)
    }
}

/// Stage-two filter applied to retrieved candidates.
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'a> {
    config: &'a MatchingConfig,
}

impl<'a> CandidateFilter<'a> {
    pub fn new(config: &'a MatchingConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, description: &WatchDescription, candidate: &ReferenceWatch) -> GateDecision {
        let brand_score = brand_score(description, candidate);
        let model_score = model_score(description, candidate);

        if meets_minimum_criteria(brand_score, model_score, self.config) {
            GateDecision::Accepted {
                brand_score,
                model_score,
            }
        } else {
            GateDecision::Rejected {
                brand_score,
                model_score,
            }
        }
    }

    pub fn admits(&self, description: &WatchDescription, candidate: &ReferenceWatch) -> bool {
        self.evaluate(description, candidate).is_accepted()
    }
}
