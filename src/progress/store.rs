//! Progress stores: one record per difficulty tier.
//!
//! Stores never surface failures to the session. A read that finds nothing
//! usable returns the zero record; a failed write is logged and dropped
//! (the next successful write supersedes it). In-memory board state is never
//! rolled back on a persistence failure.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::{error, warn};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::Difficulty;

use super::record::SavedRecord;

/// Per-tier persisted progress.
///
/// Reads block until a record (or the zero record) is available; writes are
/// best-effort with no observable result.
pub trait ProgressStore {
    /// The persisted record for a tier, or the zero record.
    fn read(&self, tier: Difficulty) -> SavedRecord;

    /// Persist a tier's record. Failures are logged, never returned.
    fn write(&mut self, tier: Difficulty, record: SavedRecord);
}

/// In-memory store for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: FxHashMap<Difficulty, SavedRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn read(&self, tier: Difficulty) -> SavedRecord {
        self.records.get(&tier).cloned().unwrap_or_default()
    }

    fn write(&mut self, tier: Difficulty, record: SavedRecord) {
        self.records.insert(tier, record);
    }
}

/// A failed store operation. Internal to the store implementations; the
/// [`ProgressStore`] surface converts these to logs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("progress file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("progress record encoding: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed store: one JSON record per tier under a base directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn record_path(&self, tier: Difficulty) -> PathBuf {
        self.dir.join(format!("{}.json", tier.storage_key()))
    }

    fn try_read(&self, tier: Difficulty) -> Result<SavedRecord, StoreError> {
        let bytes = fs::read(self.record_path(tier))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn try_write(&self, tier: Difficulty, record: &SavedRecord) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_vec_pretty(record)?;
        fs::write(self.record_path(tier), json)?;
        Ok(())
    }
}

impl ProgressStore for FileStore {
    fn read(&self, tier: Difficulty) -> SavedRecord {
        match self.try_read(tier) {
            Ok(record) => record,
            Err(StoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                SavedRecord::default()
            }
            Err(err) => {
                warn!(
                    "unreadable {} progress, starting from the zero record: {err}",
                    tier.storage_key()
                );
                SavedRecord::default()
            }
        }
    }

    fn write(&mut self, tier: Difficulty, record: SavedRecord) {
        if let Err(err) = self.try_write(tier, &record) {
            error!("failed to persist {} progress: {err}", tier.storage_key());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SavedRecord {
        SavedRecord {
            id: 16,
            solved: false,
            time_to_solve: String::new(),
            start_time: 1_764_500_000_000,
            lhs: "?3?".to_string(),
            rhs: String::new(),
            reserves: "58".to_string(),
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read(Difficulty::Easy), SavedRecord::default());

        store.write(Difficulty::Easy, sample());
        assert_eq!(store.read(Difficulty::Easy), sample());
        // tiers are independent
        assert_eq!(store.read(Difficulty::Medium), SavedRecord::default());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert_eq!(store.read(Difficulty::Hard), SavedRecord::default());

        store.write(Difficulty::Hard, sample());
        assert_eq!(store.read(Difficulty::Hard), sample());
        assert_eq!(store.read(Difficulty::Easy), SavedRecord::default());
    }

    #[test]
    fn test_file_store_corrupt_record_degrades_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.write(Difficulty::Easy, sample());
        fs::write(dir.path().join("easy.json"), b"{not json").unwrap();

        assert_eq!(store.read(Difficulty::Easy), SavedRecord::default());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("saves/progress");
        let mut store = FileStore::new(&nested);

        store.write(Difficulty::Medium, sample());
        assert_eq!(store.read(Difficulty::Medium), sample());
    }
}
