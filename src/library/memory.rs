use std::cmp::Ordering;
use std::path::Path;

use tracing::{debug, info};

use crate::model::ReferenceWatch;
use crate::similarity::levenshtein_similarity;

use super::backend::ReferenceLibrary;
use super::error::{LibraryError, LibraryResult};

/// Reference library held in memory.
///
/// Stage-one retrieval scores each brand with normalized Levenshtein similarity, keeps those at
/// or above the floor, and returns the closest first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceLibrary {
    references: Vec<ReferenceWatch>,
}

impl InMemoryReferenceLibrary {
    pub fn new(references: Vec<ReferenceWatch>) -> Self {
        Self { references }
    }

    /// Loads a JSON array of reference records.
    pub async fn load(path: &Path) -> LibraryResult<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| LibraryError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })?;

        let references: Vec<ReferenceWatch> =
            serde_json::from_slice(&bytes).map_err(|source| LibraryError::InvalidLibrary {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            references = references.len(),
            "Loaded reference library"
        );

        Ok(Self::new(references))
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn references(&self) -> &[ReferenceWatch] {
        &self.references
    }

    fn search(&self, brand: &str, min_similarity: f64, limit: usize) -> Vec<ReferenceWatch> {
        let mut scored: Vec<(f64, &ReferenceWatch)> = self
            .references
            .iter()
            .filter_map(|reference| {
                let similarity = levenshtein_similarity(brand, reference.brand()?);
                (similarity >= min_similarity).then_some((similarity, reference))
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, reference)| reference.clone())
            .collect()
    }
}

impl ReferenceLibrary for InMemoryReferenceLibrary {
    async fn find_candidates(
        &self,
        brand: &str,
        min_similarity: f64,
        limit: usize,
    ) -> LibraryResult<Vec<ReferenceWatch>> {
        let candidates = self.search(brand, min_similarity, limit);
        debug!(
            brand,
            min_similarity,
            limit,
            found = candidates.len(),
            "Brand search complete"
        );
        Ok(candidates)
    }
}
