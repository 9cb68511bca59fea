//! Repository port for snapshot persistence.
//!
//! This module defines the trait boundary between the engine and the
//! storage mechanism for learned state.

use std::path::Path;

use crate::{Result, snapshot::Snapshot};

/// Port for persisting and loading engine snapshots.
///
/// Abstracts the storage format so the engine never couples to a specific
/// serialization scheme.
pub trait SnapshotRepository {
    /// Save a snapshot to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be created or written to, or if
    /// serialization fails.
    fn save(&self, snapshot: &Snapshot, path: &Path) -> Result<()>;

    /// Load a snapshot from persistent storage.
    ///
    /// Returns `Ok(None)` when no snapshot exists at `path`; a missing
    /// snapshot is recoverable, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    fn load(&self, path: &Path) -> Result<Option<Snapshot>>;
}
