//! In-memory collaborator doubles.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::model::ReferenceWatch;

use super::backend::{ComparisonStore, ReferenceLibrary};
use super::error::{LibraryError, LibraryResult};
use super::record::ComparisonRecord;

/// Arguments of one `find_candidates` call.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRequest {
    pub brand: String,
    pub min_similarity: f64,
    pub limit: usize,
}

/// Returns its contents unfiltered, in insertion order.
///
/// Clones share state, so a test can keep a handle after moving one into an orchestrator.
#[derive(Debug, Default, Clone)]
pub struct MockReferenceLibrary {
    references: Arc<RwLock<Vec<ReferenceWatch>>>,
    requests: Arc<RwLock<Vec<CandidateRequest>>>,
    fail: Arc<AtomicBool>,
}

impl MockReferenceLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_references(references: Vec<ReferenceWatch>) -> Self {
        let library = Self::new();
        *library.references.write().expect("lock poisoned") = references;
        library
    }

    pub fn insert(&self, reference: ReferenceWatch) {
        self.references
            .write()
            .expect("lock poisoned")
            .push(reference);
    }

    /// Makes every subsequent call fail with [`LibraryError::Unavailable`].
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.requests.read().expect("lock poisoned").len()
    }

    pub fn requests(&self) -> Vec<CandidateRequest> {
        self.requests.read().expect("lock poisoned").clone()
    }
}

impl ReferenceLibrary for MockReferenceLibrary {
    async fn find_candidates(
        &self,
        brand: &str,
        min_similarity: f64,
        limit: usize,
    ) -> LibraryResult<Vec<ReferenceWatch>> {
        self.requests
            .write()
            .expect("lock poisoned")
            .push(CandidateRequest {
                brand: brand.to_string(),
                min_similarity,
                limit,
            });

        if self.fail.load(Ordering::SeqCst) {
            return Err(LibraryError::Unavailable {
                reason: "mock library configured to fail".to_string(),
            });
        }

        Ok(self.references.read().expect("lock poisoned").clone())
    }
}

/// Records every saved comparison.
#[derive(Debug, Default, Clone)]
pub struct MockComparisonStore {
    records: Arc<RwLock<Vec<ComparisonRecord>>>,
    attempts: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

impl MockComparisonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent save fail with [`LibraryError::Unavailable`].
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<ComparisonRecord> {
        self.records.read().expect("lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Saves attempted, including failed ones.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl ComparisonStore for MockComparisonStore {
    async fn save_comparison(&self, record: ComparisonRecord) -> LibraryResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(LibraryError::Unavailable {
                reason: "mock store configured to fail".to_string(),
            });
        }

        self.records.write().expect("lock poisoned").push(record);
        Ok(())
    }
}
