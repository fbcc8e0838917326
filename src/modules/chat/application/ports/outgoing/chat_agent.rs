use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatAgentError {
    #[error("chat agent unreachable: {0}")]
    Unreachable(String),

    #[error("chat agent returned an unusable response: {0}")]
    BadResponse(String),
}

/// Outgoing port for the external assistant that answers visitor questions.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    async fn reply(&self, message: &str) -> Result<String, ChatAgentError>;
}
