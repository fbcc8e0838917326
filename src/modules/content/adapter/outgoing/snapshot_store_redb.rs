use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, TableDefinition};

use crate::modules::content::application::ports::outgoing::snapshot_store::{
    SnapshotStore, SnapshotStoreError,
};

const SNAPSHOTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("snapshots");

/// Durable snapshot store on redb: one table, snapshot key -> JSON bytes.
#[derive(Clone)]
pub struct RedbSnapshotStore {
    db: Arc<Database>,
}

impl RedbSnapshotStore {
    /// Open (or create) the database file. Failure here means "no durable
    /// store available"; the caller is expected to fall back to the
    /// in-memory store rather than abort.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SnapshotStoreError> {
        let db = Database::create(path)
            .map_err(|e| SnapshotStoreError::Unavailable(e.to_string()))?;

        // Make sure the table exists so reads on a fresh file succeed.
        let write_txn = db
            .begin_write()
            .map_err(|e| SnapshotStoreError::Unavailable(e.to_string()))?;
        write_txn
            .open_table(SNAPSHOTS_TABLE)
            .map_err(|e| SnapshotStoreError::Unavailable(e.to_string()))?;
        write_txn
            .commit()
            .map_err(|e| SnapshotStoreError::Unavailable(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl SnapshotStore for RedbSnapshotStore {
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>, SnapshotStoreError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| SnapshotStoreError::Backend(e.to_string()))?;
        let table = read_txn
            .open_table(SNAPSHOTS_TABLE)
            .map_err(|e| SnapshotStoreError::Backend(e.to_string()))?;

        let value = table
            .get(key)
            .map_err(|e| SnapshotStoreError::Backend(e.to_string()))?;
        Ok(value.map(|v| v.value().to_vec()))
    }

    fn save_raw(&self, key: &str, bytes: &[u8]) -> Result<(), SnapshotStoreError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| SnapshotStoreError::Backend(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(SNAPSHOTS_TABLE)
                .map_err(|e| SnapshotStoreError::Backend(e.to_string()))?;
            table
                .insert(key, bytes)
                .map_err(|e| SnapshotStoreError::Backend(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| SnapshotStoreError::Backend(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = RedbSnapshotStore::open(dir.path().join("snapshots.redb")).unwrap();

        store.save_raw("home_page_data", br#"{"galleryItems":[]}"#).unwrap();
        let got = store.load_raw("home_page_data").unwrap().unwrap();
        assert_eq!(got, br#"{"galleryItems":[]}"#);
    }

    #[test]
    fn test_missing_key_reads_as_none_on_a_fresh_database() {
        let dir = tempdir().unwrap();
        let store = RedbSnapshotStore::open(dir.path().join("snapshots.redb")).unwrap();
        assert_eq!(store.load_raw("portfolio_data").unwrap(), None);
    }

    #[test]
    fn test_data_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshots.redb");
        {
            let store = RedbSnapshotStore::open(&path).unwrap();
            store.save_raw("k", b"persisted").unwrap();
        }
        let store = RedbSnapshotStore::open(&path).unwrap();
        assert_eq!(store.load_raw("k").unwrap().unwrap(), b"persisted");
    }

    #[test]
    fn test_unopenable_path_reports_unavailable() {
        let result = RedbSnapshotStore::open("/definitely/not/a/dir/snapshots.redb");
        assert!(matches!(result, Err(SnapshotStoreError::Unavailable(_))));
    }
}
