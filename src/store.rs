//! Persistence of the blocked-date set.
//!
//! Saving is always a full replace: every mutation hands the complete
//! current set to the store. [`FileStore`] is the reference backend; other
//! backends plug in through [`BlockedDateStore`].

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::blocked::BlockedDateSet;
use crate::error::{DayblockError, DayblockResult};

/// Synchronous persistence write primitive.
///
/// Called once per mutation of the blocked-date set with the complete
/// current set. Implementations are expected to complete quickly (local
/// storage, not network I/O); a remote or slow backend would need its own
/// latency and failure contract.
pub trait BlockedDateStore {
    fn write(&self, dates: &BlockedDateSet) -> DayblockResult<()>;
}

/// File-backed store: the sorted date list as a JSON array.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Store at the location named by the config.
    pub fn from_config(config: &crate::config::DayblockConfig) -> Self {
        FileStore::new(config.data_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the blocked dates back. A missing file is an empty set, not an
    /// error (nothing has been blocked yet).
    pub fn load(&self) -> DayblockResult<BlockedDateSet> {
        if !self.path.exists() {
            return Ok(BlockedDateSet::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let dates: Vec<NaiveDate> = serde_json::from_str(&content)
            .map_err(|e| DayblockError::Serialization(e.to_string()))?;
        Ok(dates.into_iter().collect())
    }
}

impl BlockedDateStore for FileStore {
    fn write(&self, dates: &BlockedDateSet) -> DayblockResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Sort for deterministic output
        let content = serde_json::to_string_pretty(&dates.sorted())
            .map_err(|e| DayblockError::Serialization(e.to_string()))?;

        // Write to a temp file and rename so a crash mid-write can't
        // leave a truncated date list behind.
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;

        log::debug!("wrote {} blocked dates to {}", dates.len(), self.path.display());
        Ok(())
    }
}
