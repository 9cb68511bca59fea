//! The persisted unit: Q-table and stats serialized together

use serde::{Deserialize, Serialize};

use crate::{q_learning::QTable, stats::Stats};

/// Versioned snapshot of everything the engine learns.
///
/// Saved and loaded as one blob so the table and its counters can never
/// drift apart on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub q_table: QTable,
    pub stats: Stats,
}

impl Snapshot {
    pub const VERSION: u32 = 1;

    pub fn new(q_table: QTable, stats: Stats) -> Self {
        Self {
            version: Self::VERSION,
            q_table,
            stats,
        }
    }

    /// Reject snapshots written by an incompatible format version
    pub fn check_version(&self) -> crate::Result<()> {
        if self.version != Self::VERSION {
            return Err(crate::Error::SnapshotVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }
        Ok(())
    }
}
