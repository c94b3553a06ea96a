use std::sync::Arc;

use crate::modules::dom;
use crate::modules::storage::{BrowserLocalStorage, KeyValueStorage};
use crate::shared::constants::TOKEN_STORAGE_KEY;

/// Handle to the persisted login session.
///
/// Wraps a key-value store holding the bearer token under a fixed key. At
/// most one token is stored at a time; the token itself is opaque to the
/// client.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Session store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserLocalStorage))
    }

    /// Persist the bearer token. Write failures are not surfaced.
    pub fn store_token(&self, token: &str) {
        self.storage.set(TOKEN_STORAGE_KEY, token);
    }

    /// The stored token, or None when absent or empty.
    pub fn token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_STORAGE_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Delete the stored token.
    pub fn clear_token(&self) {
        self.storage.remove(TOKEN_STORAGE_KEY);
    }

    /// True iff a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Clear the stored token, then navigate to the login page.
    pub fn logout(&self, login_path: &str) {
        self.clear_token();
        tracing::info!("Session cleared, redirecting to {}", login_path);
        dom::navigate_to(login_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::InMemoryStorage;

    fn memory_session() -> SessionStore {
        SessionStore::new(Arc::new(InMemoryStorage::new()))
    }

    #[test]
    fn test_token_roundtrip() {
        let session = memory_session();
        assert_eq!(session.token(), None);

        session.store_token("tok-1");
        assert_eq!(session.token(), Some("tok-1".to_string()));

        session.clear_token();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_is_authenticated_reflects_presence() {
        let session = memory_session();
        assert!(!session.is_authenticated());

        session.store_token("tok-1");
        assert!(session.is_authenticated());

        session.clear_token();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let session = memory_session();
        session.store_token("");
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_the_store() {
        let session = memory_session();
        let other = session.clone();
        session.store_token("shared");
        assert_eq!(other.token(), Some("shared".to_string()));
    }
}
