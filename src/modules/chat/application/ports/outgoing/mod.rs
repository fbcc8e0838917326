pub mod chat_agent;
