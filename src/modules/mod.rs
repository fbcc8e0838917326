pub mod auth;
pub mod chat;
pub mod contact;
pub mod content;
pub mod multimedia;
