use serde::Serialize;

/// User record issued on a successful mock login. This is a placeholder
/// identity, not a real authorization subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminUser {
    pub username: String,
    pub role: String,
}

impl AdminUser {
    pub fn admin(username: &str) -> Self {
        Self {
            username: username.to_string(),
            role: "admin".to_string(),
        }
    }
}
