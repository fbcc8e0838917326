use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::chat::application::ports::outgoing::chat_agent::{ChatAgent, ChatAgentError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Serialize)]
struct AgentRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct AgentResponse {
    reply: String,
}

/// Talks to the hosted assistant over HTTP. The wire contract is a single
/// POST: `{"message": ...}` in, `{"reply": ...}` out.
pub struct HttpChatAgent {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatAgent {
    pub fn new(endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, endpoint }
    }
}

#[async_trait]
impl ChatAgent for HttpChatAgent {
    async fn reply(&self, message: &str) -> Result<String, ChatAgentError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AgentRequest { message })
            .send()
            .await
            .map_err(|e| ChatAgentError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatAgentError::BadResponse(format!(
                "status {}",
                response.status()
            )));
        }

        let body: AgentResponse = response
            .json()
            .await
            .map_err(|e| ChatAgentError::BadResponse(e.to_string()))?;

        Ok(body.reply)
    }
}
