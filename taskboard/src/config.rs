//! Where the board lives on disk

use crate::storage::{FileStorage, STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DIR_ENV_VAR: &str = "TASKBOARD_DIR";

const DATA_DIR_NAME: &str = "taskboard";
const FALLBACK_DIR: &str = ".taskboard";

/// Storage location settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Directory holding the board file
    pub data_dir: PathBuf,
    /// Storage key, used as the file stem
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl BoardConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            storage_key: default_storage_key(),
        }
    }

    /// Pick the data directory: explicit path, then `TASKBOARD_DIR`, then the
    /// platform data dir, then `./.taskboard`.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let data_dir = explicit
            .or_else(|| {
                std::env::var_os(DIR_ENV_VAR)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| dirs::data_dir().map(|d| d.join(DATA_DIR_NAME)))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR));

        tracing::debug!(data_dir = %data_dir.display(), "resolved board location");
        Self::new(data_dir)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// File storage for this configuration
    pub fn storage(&self) -> FileStorage {
        FileStorage::with_key(&self.data_dir, &self.storage_key)
    }
}
