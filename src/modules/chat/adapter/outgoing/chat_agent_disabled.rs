use async_trait::async_trait;

use crate::modules::chat::application::ports::outgoing::chat_agent::{ChatAgent, ChatAgentError};

/// Used when no agent endpoint is configured. Every request takes the
/// degrade path and the visitor sees the canned apology.
pub struct DisabledChatAgent;

#[async_trait]
impl ChatAgent for DisabledChatAgent {
    async fn reply(&self, _message: &str) -> Result<String, ChatAgentError> {
        Err(ChatAgentError::Unreachable(
            "no chat agent configured".to_string(),
        ))
    }
}
