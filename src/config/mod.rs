//! Environment-backed configuration.
//!
//! [`MatchingConfig`] holds every scoring knob and is passed by reference into each call; there
//! is no process-wide instance. [`Config`] holds the file locations the `loupe` binary needs.
//! Both have defaults and accept `LOUPE_*` environment overrides.

pub mod error;
pub mod matching;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use matching::{ConfidenceThresholds, MatchWeights, MatchingConfig, SimilarityFloors};

use std::env;
use std::path::PathBuf;

/// Default library location used when `LOUPE_LIBRARY_PATH` is not set.
pub const DEFAULT_LIBRARY_PATH: &str = "./library.json";

/// Default comparison log used when `LOUPE_COMPARISON_LOG` is not set.
pub const DEFAULT_COMPARISON_LOG: &str = "./.data/comparisons.jsonl";

/// Binary configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON array of reference records. Default: `./library.json`.
    pub library_path: PathBuf,

    /// JSON-lines file best-match comparisons are appended to.
    /// Default: `./.data/comparisons.jsonl`.
    pub comparison_log_path: PathBuf,

    /// Scoring configuration.
    pub matching: MatchingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY_PATH),
            comparison_log_path: PathBuf::from(DEFAULT_COMPARISON_LOG),
            matching: MatchingConfig::default(),
        }
    }
}

impl Config {
    const ENV_LIBRARY_PATH: &'static str = "LOUPE_LIBRARY_PATH";
    const ENV_COMPARISON_LOG: &'static str = "LOUPE_COMPARISON_LOG";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let library_path = parse_path_from_env(Self::ENV_LIBRARY_PATH, defaults.library_path);
        let comparison_log_path =
            parse_path_from_env(Self::ENV_COMPARISON_LOG, defaults.comparison_log_path);
        let matching = MatchingConfig::from_env()?;

        Ok(Self {
            library_path,
            comparison_log_path,
            matching,
        })
    }

    /// Validates paths and the matching configuration (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.library_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.library_path.clone(),
            });
        }
        if !self.library_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.library_path.clone(),
            });
        }

        if let Some(parent) = self.comparison_log_path.parent() {
            if parent.exists() && !parent.is_dir() {
                return Err(ConfigError::NotADirectory {
                    path: parent.to_path_buf(),
                });
            }
        }

        self.matching.validate()
    }
}

pub(crate) fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
    env::var(var_name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or(default)
}

pub(crate) fn parse_f64_from_env(var_name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| ConfigError::InvalidNumber {
                name: var_name,
                value,
                source: e,
            }),
        Err(_) => Ok(default),
    }
}

pub(crate) fn parse_usize_from_env(
    var_name: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    match env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| ConfigError::InvalidCount {
                name: var_name,
                value,
                source: e,
            }),
        Err(_) => Ok(default),
    }
}
