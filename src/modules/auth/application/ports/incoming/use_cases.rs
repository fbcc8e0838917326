use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::domain::entities::AdminUser;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub user: AdminUser,
}

#[async_trait]
pub trait AuthUseCase: Send + Sync {
    /// Check the fixed credential pair; on success issue an opaque session
    /// token and store the user record.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, LoginError>;

    /// Revoke a session. Unknown tokens are a no-op.
    async fn logout(&self, token: &str);
}
