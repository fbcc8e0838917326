use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::AdminUser;
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthUseCase, LoginError, LoginResult,
};
use crate::modules::auth::application::services::session_store::SessionStore;

/// The single accepted credential pair. A stand-in for a real user store;
/// the values are overridable per deployment but never hashed or rotated.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
        }
    }
}

pub struct MockAuthService {
    credentials: AdminCredentials,
    sessions: Arc<SessionStore>,
}

impl MockAuthService {
    pub fn new(credentials: AdminCredentials, sessions: Arc<SessionStore>) -> Self {
        Self {
            credentials,
            sessions,
        }
    }
}

#[async_trait]
impl AuthUseCase for MockAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, LoginError> {
        if username != self.credentials.username || password != self.credentials.password {
            return Err(LoginError::InvalidCredentials);
        }

        let user = AdminUser::admin(username);
        // Opaque random token; nothing is encoded in it.
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), user.clone());
        info!("admin session opened for '{}'", username);

        Ok(LoginResult { token, user })
    }

    async fn logout(&self, token: &str) {
        self.sessions.revoke(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (MockAuthService, Arc<SessionStore>) {
        let sessions = Arc::new(SessionStore::new());
        let creds = AdminCredentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };
        (MockAuthService::new(creds, sessions.clone()), sessions)
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials_opens_a_session() {
        let (svc, sessions) = service();

        let result = svc.login("admin", "admin123").await.unwrap();
        assert_eq!(result.user.role, "admin");
        assert_eq!(
            sessions.validate(&result.token).unwrap().username,
            "admin"
        );
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_credentials() {
        let (svc, _sessions) = service();
        assert_eq!(
            svc.login("admin", "nope").await.unwrap_err(),
            LoginError::InvalidCredentials
        );
        assert_eq!(
            svc.login("root", "admin123").await.unwrap_err(),
            LoginError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_tokens_are_opaque_and_unique_per_login() {
        let (svc, _sessions) = service();
        let a = svc.login("admin", "admin123").await.unwrap();
        let b = svc.login("admin", "admin123").await.unwrap();
        assert_ne!(a.token, b.token);
    }

    #[tokio::test]
    async fn test_logout_revokes_the_session() {
        let (svc, sessions) = service();
        let result = svc.login("admin", "admin123").await.unwrap();
        svc.logout(&result.token).await;
        assert!(sessions.validate(&result.token).is_none());
    }
}
