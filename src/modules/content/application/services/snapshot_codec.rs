//! JSON load/save over the snapshot store port.
//!
//! A missing key, a corrupt document, and a failing store all read as
//! `None`: the caller reseeds from defaults. Writes are best-effort; a
//! failure is logged and swallowed because in-memory state stays
//! authoritative for the session.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::modules::content::application::ports::outgoing::snapshot_store::SnapshotStore;

pub fn load_json<T: DeserializeOwned>(store: &dyn SnapshotStore, key: &str) -> Option<T> {
    let bytes = match store.load_raw(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(e) => {
            warn!("snapshot read failed for '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            // Corruption is treated identically to absence.
            warn!("snapshot for '{}' is corrupt, reseeding: {}", key, e);
            None
        }
    }
}

pub fn save_json<T: Serialize>(store: &dyn SnapshotStore, key: &str, value: &T) {
    let bytes = match serde_json::to_vec(value) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("snapshot for '{}' failed to serialize: {}", key, e);
            return;
        }
    };

    if let Err(e) = store.save_raw(key, &bytes) {
        warn!("snapshot write failed for '{}': {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::adapter::outgoing::snapshot_store_memory::MemorySnapshotStore;
    use crate::modules::content::application::ports::outgoing::snapshot_store::{
        SnapshotStoreError,
    };

    struct BrokenStore;

    impl SnapshotStore for BrokenStore {
        fn load_raw(&self, _key: &str) -> Result<Option<Vec<u8>>, SnapshotStoreError> {
            Err(SnapshotStoreError::Unavailable("offline".to_string()))
        }

        fn save_raw(&self, _key: &str, _bytes: &[u8]) -> Result<(), SnapshotStoreError> {
            Err(SnapshotStoreError::Backend("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_round_trip_through_memory_store() {
        let store = MemorySnapshotStore::new();
        save_json(&store, "k", &vec![1, 2, 3]);
        let back: Option<Vec<i32>> = load_json(&store, "k");
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let store = MemorySnapshotStore::new();
        let got: Option<Vec<i32>> = load_json(&store, "nothing");
        assert!(got.is_none());
    }

    #[test]
    fn test_corrupt_document_reads_as_none() {
        let store = MemorySnapshotStore::new();
        store.save_raw("k", b"{not json").unwrap();
        let got: Option<Vec<i32>> = load_json(&store, "k");
        assert!(got.is_none());
    }

    #[test]
    fn test_store_failures_never_panic_or_surface() {
        let store = BrokenStore;
        let got: Option<Vec<i32>> = load_json(&store, "k");
        assert!(got.is_none());
        save_json(&store, "k", &vec![1]); // swallowed
    }
}
