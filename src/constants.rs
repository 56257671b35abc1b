//! Cross-cutting, shared constants.
//!
//! Scores come in two scales. Raw similarities are on `[0, 1]`; component, match and
//! discrepancy scores are on `[0, 100]`. Constants are named after the scale they live on.
//!
//! # Weight Invariant
//!
//! The four default weights sum to exactly `1.0`, which keeps the match score on the same
//! `[0, 100]` scale as its components. [`MatchWeights::validate`](crate::config::MatchWeights::validate)
//! enforces the same invariant for overrides.

pub const DEFAULT_BRAND_WEIGHT: f64 = 0.40;
pub const DEFAULT_MODEL_WEIGHT: f64 = 0.35;
pub const DEFAULT_REFERENCE_WEIGHT: f64 = 0.15;
pub const DEFAULT_PHYSICAL_WEIGHT: f64 = 0.10;

/// Allowed drift of the weight sum away from `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

pub const DEFAULT_EXCELLENT_THRESHOLD: f64 = 85.0;
pub const DEFAULT_GOOD_THRESHOLD: f64 = 70.0;
pub const DEFAULT_POSSIBLE_THRESHOLD: f64 = 55.0;
pub const DEFAULT_POOR_THRESHOLD: f64 = 0.0;

/// Stage-one (retrieval) brand similarity floor, on `[0, 1]`.
pub const DEFAULT_RETRIEVAL_BRAND_FLOOR: f64 = 0.75;
/// Stage-two brand score floor, on `[0, 100]`.
pub const DEFAULT_MIN_BRAND_SCORE: f64 = 65.0;
/// Stage-two model score floor, on `[0, 100]`.
pub const DEFAULT_MIN_MODEL_SCORE: f64 = 50.0;

pub const DEFAULT_MAX_RESULTS: usize = 5;
pub const DEFAULT_CANDIDATE_LIMIT: usize = 50;

/// Average normalized length below which `auto` mode picks Jaro-Winkler.
pub const AUTO_MODE_LENGTH_CUTOFF: f64 = 20.0;

/// Physical descriptors scoring above this similarity earn full credit.
pub const PHYSICAL_FULL_CREDIT_SIMILARITY: f64 = 0.8;

/// Similarity at which a string field counts as an exact match.
pub const EXACT_MATCH_SIMILARITY: f64 = 0.95;
pub const MINOR_VARIATION_SIMILARITY: f64 = 0.85;
pub const MODERATE_DIFFERENCE_SIMILARITY: f64 = 0.70;

/// Similarity above which an expected authenticity marker counts as observed.
pub const MARKER_MATCH_SIMILARITY: f64 = 0.7;
