use std::collections::HashMap;

use parking_lot::RwLock;

use crate::modules::auth::application::domain::entities::AdminUser;

/// In-process session map: opaque token -> user record.
///
/// Sessions live for the lifetime of the process; there is no expiry,
/// matching the mock gate this replaces.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, AdminUser>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, token: String, user: AdminUser) {
        self.sessions.write().insert(token, user);
    }

    pub fn validate(&self, token: &str) -> Option<AdminUser> {
        self.sessions.read().get(token).cloned()
    }

    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.write().remove(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_after_insert_and_revoke() {
        let store = SessionStore::new();
        store.insert("tok".to_string(), AdminUser::admin("admin"));

        assert_eq!(store.validate("tok").unwrap().username, "admin");
        assert!(store.validate("other").is_none());

        assert!(store.revoke("tok"));
        assert!(store.validate("tok").is_none());
        assert!(!store.revoke("tok"));
    }
}
