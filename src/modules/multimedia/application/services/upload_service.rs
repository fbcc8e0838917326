use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::multimedia::application::domain::entities::{ImageCategory, StoredImage};
use crate::modules::multimedia::application::domain::upload_policy::{
    UploadPolicy, UploadPolicyError,
};
use crate::modules::multimedia::application::ports::incoming::use_cases::{
    ServedImage, UploadError, UploadUseCase,
};
use crate::modules::multimedia::application::ports::outgoing::image_store::ImageStore;

pub struct UploadService {
    store: Arc<dyn ImageStore>,
    policy: UploadPolicy,
}

impl UploadService {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self {
            store,
            policy: UploadPolicy::default(),
        }
    }

    fn extension_of(file_name: &str) -> Option<&str> {
        file_name.rsplit_once('.').map(|(_, ext)| ext)
    }

    /// Reject names that could escape the category directory.
    fn is_safe_name(file_name: &str) -> bool {
        !file_name.is_empty()
            && !file_name.contains(['/', '\\'])
            && !file_name.contains("..")
    }
}

#[async_trait]
impl UploadUseCase for UploadService {
    async fn store_image(
        &self,
        category: ImageCategory,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<StoredImage, UploadError> {
        let ext = self
            .policy
            .check(content_type, bytes.len())
            .map_err(|e| match e {
                UploadPolicyError::TooLarge => UploadError::TooLarge,
                UploadPolicyError::UnsupportedType => UploadError::UnsupportedType,
            })?;

        let file_name = format!("{}.{}", Uuid::new_v4(), ext);
        self.store
            .put(category, &file_name, &bytes)
            .await
            .map_err(|e| UploadError::Storage(e.to_string()))?;

        info!(
            category = category.dir_name(),
            file = %file_name,
            size = bytes.len(),
            "image stored"
        );

        Ok(StoredImage {
            url: format!("/api/images/{}/{}", category.dir_name(), file_name),
            file_name,
            size_bytes: bytes.len(),
        })
    }

    async fn fetch_image(
        &self,
        category: ImageCategory,
        file_name: &str,
    ) -> Result<Option<ServedImage>, UploadError> {
        if !Self::is_safe_name(file_name) {
            return Ok(None);
        }

        let content_type = Self::extension_of(file_name)
            .and_then(|ext| self.policy.mime_for_extension(ext));
        let Some(content_type) = content_type else {
            return Ok(None);
        };

        let bytes = self
            .store
            .get(category, file_name)
            .await
            .map_err(|e| UploadError::Storage(e.to_string()))?;

        Ok(bytes.map(|bytes| ServedImage {
            bytes,
            content_type,
        }))
    }
}
