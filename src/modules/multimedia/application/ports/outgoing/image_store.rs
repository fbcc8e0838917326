use async_trait::async_trait;

use crate::modules::multimedia::application::domain::entities::ImageCategory;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStoreError {
    #[error("image store backend error: {0}")]
    Backend(String),
}

/// Outgoing port: durable storage for uploaded image bytes.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn put(
        &self,
        category: ImageCategory,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), ImageStoreError>;

    async fn get(
        &self,
        category: ImageCategory,
        file_name: &str,
    ) -> Result<Option<Vec<u8>>, ImageStoreError>;
}
