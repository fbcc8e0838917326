use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::modules::chat::application::ports::incoming::use_cases::{
    ChatError, ChatResponse, ChatUseCase,
};
use crate::modules::chat::application::ports::outgoing::chat_agent::ChatAgent;

/// Shown when the agent is unreachable or returns garbage. The visitor still
/// gets a 200 with this text, matching the chat widget's degrade mode.
pub const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error processing your request. Please try again later.";

/// Phrases the assistant uses to decline off-topic questions. Matching is
/// substring-based on the reply text, case-insensitive.
const REFUSAL_PHRASES: &[&str] = &[
    "I'm LLA AI Bot, designed specifically",
    "I can only answer questions about",
    "Please ask me something about him instead",
    "outside your scope",
    "outside this scope",
];

pub fn is_refusal(reply: &str) -> bool {
    let reply = reply.to_lowercase();
    REFUSAL_PHRASES
        .iter()
        .any(|phrase| reply.contains(&phrase.to_lowercase()))
}

pub struct ChatService {
    agent: Arc<dyn ChatAgent>,
}

impl ChatService {
    pub fn new(agent: Arc<dyn ChatAgent>) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl ChatUseCase for ChatService {
    async fn send_message(&self, message: &str) -> Result<ChatResponse, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::Validation("message"));
        }

        match self.agent.reply(message).await {
            Ok(reply) => {
                let out_of_scope = is_refusal(&reply);
                Ok(ChatResponse {
                    reply,
                    out_of_scope,
                })
            }
            Err(e) => {
                warn!("chat agent failed, serving fallback reply: {}", e);
                Ok(ChatResponse {
                    reply: FALLBACK_REPLY.to_string(),
                    out_of_scope: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::application::ports::outgoing::chat_agent::ChatAgentError;

    struct FixedAgent(Result<String, ChatAgentError>);

    #[async_trait]
    impl ChatAgent for FixedAgent {
        async fn reply(&self, _message: &str) -> Result<String, ChatAgentError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_on_topic_reply_passes_through() {
        let svc = ChatService::new(Arc::new(FixedAgent(Ok(
            "He has nine years of experience.".to_string()
        ))));

        let resp = svc.send_message("What does he do?").await.unwrap();
        assert_eq!(resp.reply, "He has nine years of experience.");
        assert!(!resp.out_of_scope);
    }

    #[tokio::test]
    async fn test_refusal_phrases_are_flagged_out_of_scope() {
        for reply in [
            "I'm LLA AI Bot, designed specifically to answer questions about him.",
            "That question is outside this scope.",
            "Sorry, that is outside your scope here. Please ask me something about him instead.",
        ] {
            let svc = ChatService::new(Arc::new(FixedAgent(Ok(reply.to_string()))));
            let resp = svc.send_message("What is the weather?").await.unwrap();
            assert!(resp.out_of_scope, "not flagged: {}", reply);
        }
    }

    #[test]
    fn test_refusal_match_ignores_case() {
        assert!(is_refusal("that request is OUTSIDE YOUR SCOPE."));
        assert!(is_refusal("i'm lla ai bot, designed specifically for him."));
        assert!(!is_refusal("He is well outside the city."));
    }

    #[tokio::test]
    async fn test_agent_failure_degrades_to_canned_reply() {
        let svc = ChatService::new(Arc::new(FixedAgent(Err(ChatAgentError::Unreachable(
            "connection refused".to_string(),
        )))));

        let resp = svc.send_message("Hello").await.unwrap();
        assert_eq!(resp.reply, FALLBACK_REPLY);
        assert!(!resp.out_of_scope);
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let svc = ChatService::new(Arc::new(FixedAgent(Ok("hi".to_string()))));
        assert_eq!(
            svc.send_message("   ").await.unwrap_err(),
            ChatError::Validation("message")
        );
    }
}
