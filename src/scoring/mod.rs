//! Candidate scoring and gating.
//!
//! A candidate gets four component scores on `[0, 100]`:
//!
//! | Component | Metric | Default weight |
//! |---|---|---|
//! | brand | Jaro-Winkler | 0.40 |
//! | model | Jaro-Winkler | 0.35 |
//! | reference number | Levenshtein | 0.15 |
//! | physical | [`compare_physical_attributes`] | 0.10 |
//!
//! The match score is their weighted sum and maps to a [`ConfidenceTier`]. Before any of that,
//! [`CandidateFilter`] drops candidates whose brand or model score is under its floor.

pub mod confidence;
pub mod gating;
pub mod physical;
pub mod scorer;


pub use confidence::{ConfidenceTier, confidence_tier};
pub use gating::{CandidateFilter, GateDecision, meets_minimum_criteria};
pub use physical::{PHYSICAL_FIELDS, PhysicalComparison, PhysicalField, compare_physical_attributes};
pub use scorer::{
    ComponentScores, MatchScore, MatchScorer, brand_score, model_score, physical_score,
    reference_score,
};
