//! Matching pipeline.
//!
//! [`MatchEngine`] is the pure core: given a description and candidate references it gates,
//! scores and explains each candidate, in parallel and with cooperative cancellation.
//! [`MatchOrchestrator`] wraps it with the two I/O boundaries:
//!
//! 1. Retrieve candidates from a [`ReferenceLibrary`](crate::library::ReferenceLibrary) by
//!    approximate brand similarity.
//! 2. Run the engine on a blocking thread.
//! 3. Rank with [`rank_matches`](crate::ranking::rank_matches).
//! 4. Persist the best match to a [`ComparisonStore`](crate::library::ComparisonStore).

pub mod engine;
pub mod error;
pub mod orchestrator;
pub mod types;


pub use engine::MatchEngine;
pub use error::MatchError;
pub use orchestrator::MatchOrchestrator;
pub use types::{MatchOutcome, MatchResult, MatchStatus};
