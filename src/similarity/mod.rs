//! Normalized string similarity.
//!
//! Both inputs are case-folded and trimmed before comparison. An empty value on either side
//! scores `0.0`; identical normalized values score `1.0` regardless of algorithm. All outputs
//! are on `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::constants::AUTO_MODE_LENGTH_CUTOFF;

const WINKLER_BOOST_THRESHOLD: f64 = 0.7;
const WINKLER_MAX_PREFIX: usize = 4;
const WINKLER_PREFIX_SCALE: f64 = 0.1;

#[cfg(test)]
mod tests;

/// Which algorithm [`calculate_string_score`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityMode {
    /// Prefix-biased, suited to short identifiers.
    JaroWinkler,
    /// Edit distance normalized by the longer input.
    Levenshtein,
    /// Jaro-Winkler for short inputs, Levenshtein for long ones.
    #[default]
    Auto,
}

impl SimilarityMode {
    /// Resolves `Auto` to a concrete algorithm for the given normalized inputs.
    pub fn resolve(self, a: &str, b: &str) -> SimilarityMode {
        match self {
            SimilarityMode::Auto => {
                let avg_len = (a.chars().count() + b.chars().count()) as f64 / 2.0;
                if avg_len < AUTO_MODE_LENGTH_CUTOFF {
                    SimilarityMode::JaroWinkler
                } else {
                    SimilarityMode::Levenshtein
                }
            }
            concrete => concrete,
        }
    }
}

/// Case-folds and trims a value.
#[inline]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    calculate_string_score(a, b, SimilarityMode::JaroWinkler)
}

pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    calculate_string_score(a, b, SimilarityMode::Levenshtein)
}

/// Similarity of two values under `mode`, on `[0, 1]`.
pub fn calculate_string_score(a: &str, b: &str, mode: SimilarityMode) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    // Greedy Jaro matching is order-sensitive; a canonical argument order keeps it symmetric.
    let (first, second) = if a <= b { (&a, &b) } else { (&b, &a) };

    let score = match mode.resolve(first, second) {
        SimilarityMode::JaroWinkler => winkler_boost(strsim::jaro(first, second), first, second),
        SimilarityMode::Levenshtein | SimilarityMode::Auto => {
            strsim::normalized_levenshtein(first, second)
        }
    };

    score.clamp(0.0, 1.0)
}

/// Standard Winkler adjustment: a shared prefix of up to four characters lifts Jaro scores
/// above 0.7 toward 1.0.
fn winkler_boost(jaro: f64, a: &str, b: &str) -> f64 {
    if jaro <= WINKLER_BOOST_THRESHOLD {
        return jaro;
    }
    let prefix = a
        .chars()
        .zip(b.chars())
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();
    jaro + WINKLER_PREFIX_SCALE * prefix as f64 * (1.0 - jaro)
}

/// Like [`calculate_string_score`], treating `None` as empty.
#[inline]
pub fn optional_string_score(a: Option<&str>, b: Option<&str>, mode: SimilarityMode) -> f64 {
    calculate_string_score(a.unwrap_or_default(), b.unwrap_or_default(), mode)
}
