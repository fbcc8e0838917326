pub mod entities;
pub mod upload_policy;
