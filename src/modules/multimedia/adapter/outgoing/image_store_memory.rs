use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::modules::multimedia::application::domain::entities::ImageCategory;
use crate::modules::multimedia::application::ports::outgoing::image_store::{
    ImageStore, ImageStoreError,
};

/// Volatile image store, the test double for [`super::image_store_fs::FsImageStore`].
#[derive(Default)]
pub struct MemoryImageStore {
    files: RwLock<HashMap<(&'static str, String), Vec<u8>>>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn put(
        &self,
        category: ImageCategory,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), ImageStoreError> {
        self.files
            .write()
            .insert((category.dir_name(), file_name.to_string()), bytes.to_vec());
        Ok(())
    }

    async fn get(
        &self,
        category: ImageCategory,
        file_name: &str,
    ) -> Result<Option<Vec<u8>>, ImageStoreError> {
        Ok(self
            .files
            .read()
            .get(&(category.dir_name(), file_name.to_string()))
            .cloned())
    }
}
