use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the reference library and comparison store.
pub enum LibraryError {
    /// Library file could not be read.
    #[error("failed to read reference library '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Library file is not a JSON array of reference records.
    #[error("invalid reference library '{path}': {source}")]
    InvalidLibrary {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Comparison record could not be written.
    #[error("failed to write comparison log '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Comparison record could not be encoded.
    #[error("failed to encode comparison record: {0}")]
    EncodeFailed(#[from] serde_json::Error),

    /// Backend is unreachable or refused the request.
    #[error("reference backend unavailable: {reason}")]
    Unavailable {
        /// Error message.
        reason: String,
    },
}

/// Convenience result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
