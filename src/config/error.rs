//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric environment override could not be parsed as a float.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A count environment override could not be parsed as an unsigned integer.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidCount {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Match weights are negative, non-finite, or do not sum to 1.0.
    #[error("invalid match weights: {reason}")]
    InvalidWeights { reason: String },

    /// Confidence thresholds are out of range or out of order.
    #[error("invalid confidence thresholds: {reason}")]
    InvalidThresholds { reason: String },

    /// A similarity floor is outside its scale.
    #[error("invalid similarity floor {name}={value}: must be within [0, {max}]")]
    InvalidFloor {
        name: &'static str,
        value: f64,
        max: f64,
    },

    /// A result or candidate cap was zero.
    #[error("{name} must be > 0")]
    ZeroLimit { name: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
