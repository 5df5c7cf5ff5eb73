//! Snapshot persistence
//!
//! The whole ledger state (balances + entries) is persisted as one JSON
//! snapshot file, written atomically after every mutating operation.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json_value, write_json_atomic};
pub use snapshot::SCHEMA_VERSION;

use std::path::{Path, PathBuf};

use crate::error::LedgerResult;
use crate::ledger::Ledger;

/// Loads and saves the ledger snapshot at a fixed path
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger, migrating legacy snapshots
    ///
    /// An absent snapshot yields the default state: all balances zero and no
    /// entries.
    pub fn load(&self) -> LedgerResult<Ledger> {
        match read_json_value(&self.path)? {
            Some(value) => snapshot::decode(value),
            None => Ok(Ledger::new()),
        }
    }

    /// Persist the ledger atomically
    pub fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        write_json_atomic(&self.path, &snapshot::encode(ledger))
    }
}
