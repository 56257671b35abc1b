use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use super::backend::ComparisonStore;
use super::error::{LibraryError, LibraryResult};
use super::record::ComparisonRecord;

/// Appends one JSON line per comparison record.
///
/// Parent directories are created on first write. Writes from concurrent requests are
/// serialized so lines never interleave.
#[derive(Debug)]
pub struct JsonlComparisonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlComparisonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> LibraryError {
        LibraryError::WriteFailed {
            path: self.path.clone(),
            source,
        }
    }
}

impl ComparisonStore for JsonlComparisonStore {
    async fn save_comparison(&self, record: ComparisonRecord) -> LibraryResult<()> {
        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.write_error(e))?;

        file.write_all(&line).await.map_err(|e| self.write_error(e))?;
        file.flush().await.map_err(|e| self.write_error(e))?;

        debug!(
            path = %self.path.display(),
            record_id = %record.id,
            reference_id = %record.reference_id,
            "Comparison record appended"
        );
        Ok(())
    }
}
