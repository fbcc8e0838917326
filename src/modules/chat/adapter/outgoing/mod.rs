pub mod chat_agent_disabled;
pub mod chat_agent_http;
