use std::future::Future;

use crate::model::ReferenceWatch;

use super::error::LibraryResult;
use super::record::ComparisonRecord;

/// Source of candidate references.
pub trait ReferenceLibrary: Send + Sync {
    /// Returns up to `limit` references whose brand is approximately `brand`.
    ///
    /// `min_similarity` is on `[0, 1]`. The metric is the backend's own and need not agree with
    /// [`jaro_winkler_similarity`](crate::similarity::jaro_winkler_similarity).
    fn find_candidates(
        &self,
        brand: &str,
        min_similarity: f64,
        limit: usize,
    ) -> impl Future<Output = LibraryResult<Vec<ReferenceWatch>>> + Send;
}

/// Sink for best-match comparison records.
pub trait ComparisonStore: Send + Sync {
    fn save_comparison(
        &self,
        record: ComparisonRecord,
    ) -> impl Future<Output = LibraryResult<()>> + Send;
}
