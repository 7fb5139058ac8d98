//! Listing of persisted clips

use serde::{Deserialize, Serialize};
use std::fs::Metadata;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// One WAV file in the storage directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub filename: String,
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// Creation time as fractional Unix seconds
    pub created: f64,
    /// Last modification time as fractional Unix seconds
    pub modified: f64,
}

impl LibraryEntry {
    fn from_metadata(path: &Path, metadata: &Metadata) -> Option<Self> {
        let modified = metadata.modified().ok().map(unix_seconds)?;
        let created = metadata.created().ok().map(unix_seconds).unwrap_or(modified);

        Some(Self {
            filename: path.file_name()?.to_string_lossy().into_owned(),
            path: path.display().to_string(),
            size: metadata.len(),
            created,
            modified,
        })
    }
}

/// List `*.wav` files under `dir`, newest first.
///
/// A missing directory is an empty library. Entries whose metadata cannot be
/// read are skipped.
pub fn list_library(dir: &Path) -> Vec<LibraryEntry> {
    let reader = match std::fs::read_dir(dir) {
        Ok(reader) => reader,
        Err(e) => {
            debug!(dir = %dir.display(), "Library directory not readable: {}", e);
            return Vec::new();
        }
    };

    let mut entries: Vec<LibraryEntry> = reader
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_wav(path))
        .filter_map(|path| {
            let metadata = std::fs::metadata(&path).ok()?;
            if !metadata.is_file() {
                return None;
            }
            LibraryEntry::from_metadata(&path, &metadata)
        })
        .collect();

    entries.sort_by(|a, b| b.modified.total_cmp(&a.modified));
    entries
}

fn is_wav(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("wav")
}

fn unix_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    }
}
