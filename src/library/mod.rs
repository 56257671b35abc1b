//! Collaborators at the two I/O boundaries of the pipeline.
//!
//! [`ReferenceLibrary`] supplies stage-one candidates, pre-filtered by approximate brand
//! similarity and capped. [`ComparisonStore`] receives the best-match [`ComparisonRecord`] after
//! ranking. Both are async traits; the engine itself never performs I/O.

pub mod backend;
pub mod error;
pub mod jsonl;
pub mod memory;
pub mod record;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use backend::{ComparisonStore, ReferenceLibrary};
pub use error::{LibraryError, LibraryResult};
pub use jsonl::JsonlComparisonStore;
pub use memory::InMemoryReferenceLibrary;
pub use record::ComparisonRecord;

#[cfg(any(test, feature = "mock"))]
pub use mock::{CandidateRequest, MockComparisonStore, MockReferenceLibrary};
