use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("validation failed: {0}")]
    Validation(&'static str),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    /// True when the assistant declined because the question was not about
    /// the portfolio owner.
    pub out_of_scope: bool,
}

#[async_trait]
pub trait ChatUseCase: Send + Sync {
    /// Forward a visitor message to the assistant. Agent failures degrade to
    /// a canned apology rather than an error status.
    async fn send_message(&self, message: &str) -> Result<ChatResponse, ChatError>;
}
