//! MessagePack implementation of the snapshot repository.
//!
//! Stores the Q-table and stats as one compact binary blob via rmp_serde.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{Result, error::Error, ports::SnapshotRepository, snapshot::Snapshot};

/// MessagePack-based snapshot repository.
///
/// `save` creates missing parent directories so a fresh checkout can write
/// to the default `model/` location without setup.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotRepository for MsgPackRepository {
    fn save(&self, snapshot: &Snapshot, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                operation: format!("create directory {parent:?}"),
                source,
            })?;
        }

        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, snapshot).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize snapshot to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Option<Snapshot>> {
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;
        let reader = BufReader::new(file);

        let snapshot: Snapshot =
            rmp_serde::decode::from_read(reader).map_err(|e| Error::SerializationContext {
                operation: "deserialize snapshot from MessagePack".to_string(),
                message: e.to_string(),
            })?;
        snapshot.check_version()?;

        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{q_learning::QTable, stats::Stats, types::StateKey};

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("snapshot.msgpack");

        let mut q_table = QTable::new(0.1, 0.9);
        q_table.set(StateKey::parse(".........").unwrap(), 4, 0.42);
        let mut stats = Stats::default();
        stats.total_games = 7;
        stats.wins = 3;

        let repo = MsgPackRepository::new();
        repo.save(&Snapshot::new(q_table.clone(), stats.clone()), &file_path)
            .expect("Failed to save");

        let loaded = repo
            .load(&file_path)
            .expect("Failed to load")
            .expect("Snapshot should exist");

        assert_eq!(loaded.stats, stats);
        assert_eq!(loaded.q_table.size(), q_table.size());
        assert_eq!(
            loaded
                .q_table
                .get(&StateKey::parse(".........").unwrap(), 4),
            0.42
        );
    }

    #[test]
    fn test_load_missing_returns_none() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = MsgPackRepository::new();
        let result = repo.load(&temp_dir.path().join("absent.msgpack")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("model").join("snapshot.msgpack");

        let repo = MsgPackRepository::new();
        let snapshot = Snapshot::new(QTable::new(0.1, 0.9), Stats::default());
        repo.save(&snapshot, &file_path).expect("Failed to save");
        assert!(file_path.exists());
    }
}
