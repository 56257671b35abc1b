use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ConfidenceThresholds;

/// Coarse bucket derived from a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Excellent,
    Good,
    Possible,
    Poor,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::Excellent => "excellent",
            ConfidenceTier::Good => "good",
            ConfidenceTier::Possible => "possible",
            ConfidenceTier::Poor => "poor",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a match score to a tier, checking thresholds from the top down.
///
/// Scores under every threshold (including `poor`) are still [`ConfidenceTier::Poor`].
pub fn confidence_tier(score: f64, thresholds: &ConfidenceThresholds) -> ConfidenceTier {
    if score >= thresholds.excellent {
        ConfidenceTier::Excellent
    } else if score >= thresholds.good {
        ConfidenceTier::Good
    } else if score >= thresholds.possible {
        ConfidenceTier::Possible
    } else {
        ConfidenceTier::Poor
    }
}
