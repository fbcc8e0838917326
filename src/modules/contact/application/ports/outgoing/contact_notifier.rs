use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactSubmission;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Outgoing port: deliver a contact submission to the site owner.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}
