//! Session context for the client. It owns the session flag (the cached user
//! record under [`USER_KEY`]) and the saved cookie jar, and is handed to the
//! router and the feature clients explicitly instead of living in a global.
//! Only non-sensitive metadata is stored; the flag is never proof of auth.

use super::{
    storage::{MemoryStore, SessionStore},
    types::User,
};
use crate::client::AppError;
use std::sync::Arc;
use tracing::warn;

/// Storage key of the cached user record.
pub const USER_KEY: &str = "user";
/// Storage key of the saved `Cookie` header.
pub const COOKIES_KEY: &str = "cookies";

#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// True when a user record is cached, whatever its contents.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        match self.store.get(USER_KEY) {
            Ok(value) => value.is_some(),
            Err(err) => {
                warn!("failed to read session flag: {err}");
                false
            }
        }
    }

    /// Decoded cached user, or `None` when absent or unreadable.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    /// Caches `user` as the session flag, typically after login or `/auth/me`.
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] if the record cannot be encoded or stored.
    pub fn set_user(&self, user: &User) -> Result<(), AppError> {
        let raw = serde_json::to_string(user)
            .map_err(|err| AppError::Storage(format!("Failed to encode user: {err}")))?;
        self.store.set(USER_KEY, &raw)
    }

    /// Drops the session flag, typically on logout.
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] if the removal cannot be persisted.
    pub fn clear(&self) -> Result<(), AppError> {
        self.store.remove(USER_KEY)
    }

    #[must_use]
    pub fn cookies(&self) -> Option<String> {
        self.store.get(COOKIES_KEY).ok().flatten()
    }

    /// Saves the jar's `Cookie` header so the server session survives restarts.
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] if the value cannot be stored.
    pub fn set_cookies(&self, cookies: Option<&str>) -> Result<(), AppError> {
        match cookies {
            Some(value) if !value.trim().is_empty() => self.store.set(COOKIES_KEY, value),
            _ => self.store.remove(COOKIES_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionContext, USER_KEY};
    use crate::features::auth::{
        storage::{MemoryStore, SessionStore},
        types::User,
    };
    use std::sync::Arc;

    fn analyst() -> User {
        User {
            id: 1,
            email: "analyst@pandora.local".to_string(),
            username: "analyst".to_string(),
            plan: "free".to_string(),
            daily_quota: 100,
            is_active: true,
            is_admin: false,
            created_at: None,
        }
    }

    #[test]
    fn set_user_then_clear() {
        let session = SessionContext::in_memory();
        assert!(!session.is_authenticated());

        session.set_user(&analyst()).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(analyst()));

        session.clear().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn presence_alone_counts_as_authenticated() {
        let store = Arc::new(MemoryStore::default());
        store.set(USER_KEY, "garbage").unwrap();
        let session = SessionContext::new(store);

        assert!(session.is_authenticated());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn blank_cookies_remove_the_entry() {
        let session = SessionContext::in_memory();
        session.set_cookies(Some("access_token=abc")).unwrap();
        assert_eq!(session.cookies().as_deref(), Some("access_token=abc"));

        session.set_cookies(Some("  ")).unwrap();
        assert_eq!(session.cookies(), None);
    }
}
