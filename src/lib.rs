//! Loupe: reference matching and discrepancy analysis for luxury watches.
//!
//! Given a structured [`WatchDescription`] extracted from photographs, the engine retrieves
//! candidate [`ReferenceWatch`] records, gates them on brand and model agreement, scores the
//! survivors, explains every field-level difference, and returns a ranked shortlist.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`MatchOrchestrator`] - async entrypoint with retrieval and persistence
//! - [`MatchEngine`] - synchronous core, usable without any I/O
//! - [`MatchOutcome`], [`MatchResult`], [`MatchStatus`], [`MatchError`]
//!
//! ## Building Blocks
//! - [`calculate_string_score`], [`SimilarityMode`] - normalized string similarity
//! - [`compare_physical_attributes`], [`MatchScorer`], [`confidence_tier`]
//! - [`CandidateFilter`], [`meets_minimum_criteria`] - gating
//! - [`analyze_discrepancies`], [`summarize_discrepancies`] - field-level explanation
//! - [`rank_matches`]
//!
//! ## Collaborators
//! - [`ReferenceLibrary`], [`ComparisonStore`] - async traits at the I/O boundaries
//! - [`InMemoryReferenceLibrary`], [`JsonlComparisonStore`] - file-backed implementations
//!
//! ## Configuration
//! [`MatchingConfig`] is an immutable value passed to every call. [`Config`] adds the file
//! locations the `loupe` binary reads.
//!
//! ## Test/Mock Support
//! Mock collaborators are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod discrepancy;
pub mod hashing;
pub mod library;
pub mod matcher;
pub mod model;
pub mod ranking;
pub mod scoring;
pub mod similarity;

pub use config::{
    Config, ConfidenceThresholds, ConfigError, MatchWeights, MatchingConfig, SimilarityFloors,
};
pub use discrepancy::{
    DiscrepancySummary, FieldDiscrepancy, FieldValue, Importance, Severity,
    analyze_discrepancies, compare_field, summarize_discrepancies,
};
pub use hashing::hash_description;
pub use library::{
    ComparisonRecord, ComparisonStore, InMemoryReferenceLibrary, JsonlComparisonStore,
    LibraryError, ReferenceLibrary,
};
#[cfg(any(test, feature = "mock"))]
pub use library::{MockComparisonStore, MockReferenceLibrary};
pub use matcher::{MatchEngine, MatchError, MatchOrchestrator, MatchOutcome, MatchResult, MatchStatus};
pub use model::{
    AuthenticityIndicators, ConditionReport, Identity, ModelError, PhysicalAttributes,
    ReferenceWatch, VerificationStatus, WatchDescription,
};
pub use ranking::rank_matches;
pub use scoring::{
    CandidateFilter, ComponentScores, ConfidenceTier, GateDecision, MatchScore, MatchScorer,
    PhysicalComparison, compare_physical_attributes, confidence_tier, meets_minimum_criteria,
};
pub use similarity::{
    SimilarityMode, calculate_string_score, jaro_winkler_similarity, levenshtein_similarity,
    normalize,
};
