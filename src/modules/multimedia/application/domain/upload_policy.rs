#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("file exceeds the upload size limit")]
    TooLarge,

    #[error("unsupported content type")]
    UnsupportedType,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub allowed_mime_types: &'static [(&'static str, &'static str)],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            allowed_mime_types: &[
                ("image/jpeg", "jpg"),
                ("image/png", "png"),
                ("image/webp", "webp"),
            ],
        }
    }
}

impl UploadPolicy {
    /// Validate an incoming upload; returns the file extension for the
    /// declared content type.
    pub fn check(
        &self,
        content_type: Option<&str>,
        size_bytes: usize,
    ) -> Result<&'static str, UploadPolicyError> {
        // Size first so oversized bodies are refused regardless of type.
        if size_bytes > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge);
        }

        let declared = content_type.ok_or(UploadPolicyError::UnsupportedType)?;
        self.allowed_mime_types
            .iter()
            .find(|(mime, _)| *mime == declared)
            .map(|(_, ext)| *ext)
            .ok_or(UploadPolicyError::UnsupportedType)
    }

    /// Reverse lookup used when serving files back.
    pub fn mime_for_extension(&self, ext: &str) -> Option<&'static str> {
        self.allowed_mime_types
            .iter()
            .find(|(_, e)| *e == ext)
            .map(|(mime, _)| *mime)
    }
}
