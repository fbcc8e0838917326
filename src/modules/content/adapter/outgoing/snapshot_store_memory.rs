use std::collections::HashMap;

use parking_lot::RwLock;

use crate::modules::content::application::ports::outgoing::snapshot_store::{
    SnapshotStore, SnapshotStoreError,
};

/// Volatile snapshot store.
///
/// Used when no durable store is available (the app then behaves normally
/// but forgets edits on restart) and as the test double.
#[derive(Default)]
pub struct MemorySnapshotStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>, SnapshotStoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn save_raw(&self, key: &str, bytes: &[u8]) -> Result<(), SnapshotStoreError> {
        self.entries
            .write()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
