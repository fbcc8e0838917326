use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::modules::multimedia::application::domain::entities::ImageCategory;
use crate::modules::multimedia::application::ports::outgoing::image_store::{
    ImageStore, ImageStoreError,
};

/// Stores uploads on the local filesystem under `<root>/<category>/<name>`.
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, category: ImageCategory, file_name: &str) -> PathBuf {
        self.root.join(category.dir_name()).join(file_name)
    }

    async fn ensure_dir(&self, category: ImageCategory) -> Result<(), ImageStoreError> {
        tokio::fs::create_dir_all(self.root.join(category.dir_name()))
            .await
            .map_err(|e| ImageStoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn put(
        &self,
        category: ImageCategory,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), ImageStoreError> {
        self.ensure_dir(category).await?;
        tokio::fs::write(self.path_for(category, file_name), bytes)
            .await
            .map_err(|e| ImageStoreError::Backend(e.to_string()))
    }

    async fn get(
        &self,
        category: ImageCategory,
        file_name: &str,
    ) -> Result<Option<Vec<u8>>, ImageStoreError> {
        match tokio::fs::read(self.path_for(category, file_name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ImageStoreError::Backend(e.to_string())),
        }
    }
}

impl FsImageStore {
    pub fn root(&self) -> &Path {
        &self.root
    }
}
