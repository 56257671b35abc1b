//! Final ordering of match results.
//!
//! There is deliberately no score floor here: low-confidence matches stay in the list for human
//! review, and only the cap removes entries.

use std::cmp::Ordering;

use crate::matcher::MatchResult;


/// Sorts by match score, highest first, and keeps at most `max_results`.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_matches(mut results: Vec<MatchResult>, max_results: usize) -> Vec<MatchResult> {
    results.sort_by(|a, b| compare_scores(b.match_score, a.match_score));
    results.truncate(max_results);
    results
}

#[inline]
fn compare_scores(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
