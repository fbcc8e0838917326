use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactData {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("validation failed: {0}")]
    Validation(&'static str),

    #[error("notification delivery failed")]
    DeliveryFailed,
}

#[async_trait]
pub trait ContactUseCase: Send + Sync {
    async fn submit(&self, data: SubmitContactData) -> Result<(), ContactError>;
}
