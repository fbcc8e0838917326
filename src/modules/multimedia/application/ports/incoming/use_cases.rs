use async_trait::async_trait;

use crate::modules::multimedia::application::domain::entities::{ImageCategory, StoredImage};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("file exceeds the upload size limit")]
    TooLarge,

    #[error("unsupported content type")]
    UnsupportedType,

    #[error("storage failed: {0}")]
    Storage(String),
}

/// An image served back to the browser, with its resolved content type.
#[derive(Debug, Clone)]
pub struct ServedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

#[async_trait]
pub trait UploadUseCase: Send + Sync {
    /// Validate and store an uploaded image; a fresh file name is assigned.
    async fn store_image(
        &self,
        category: ImageCategory,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<StoredImage, UploadError>;

    /// Fetch a previously stored image. `None` when the name is unknown.
    async fn fetch_image(
        &self,
        category: ImageCategory,
        file_name: &str,
    ) -> Result<Option<ServedImage>, UploadError>;
}
