//! Audio storage configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where generated audio is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Flat directory holding one WAV file per generation
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

impl StorageConfig {
    /// Create the storage directory if it does not exist yet
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }
}
