use thiserror::Error;

use crate::config::ConfigError;
use crate::library::LibraryError;

#[derive(Debug, Error)]
/// Errors returned by the matching pipeline.
///
/// An empty candidate set and a fully gated one are not errors; see
/// [`MatchStatus`](super::MatchStatus).
pub enum MatchError {
    /// Description cannot be matched (e.g. no brand).
    #[error("invalid description: {reason}")]
    InvalidInput {
        /// Error message.
        reason: String,
    },

    /// Candidate retrieval failed.
    #[error("candidate retrieval failed: {0}")]
    CandidateRetrieval(#[from] LibraryError),

    /// Run was cancelled before it completed.
    #[error("matching cancelled")]
    Cancelled,

    /// Blocking scoring task panicked or was aborted.
    #[error("scoring task failed: {reason}")]
    ScoringTaskFailed {
        /// Error message.
        reason: String,
    },

    /// Invalid matching configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
