//! Key-value persistence backed by browser localStorage.
//!
//! Storage access is behind a trait so components holding a store can be
//! exercised with an in-memory double outside the browser.

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string key-value store interface.
///
/// Writes are best-effort: a full or unavailable backing store drops the
/// value silently, the same behavior localStorage callers see.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` implementation.
///
/// Holds no handle; the storage object is resolved per call so the type is
/// freely constructible in any context (calls are no-ops without a window).
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLocalStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserLocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory implementation used as a test double.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_roundtrip() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.get("k"), None);

        storage.set("k", "v1");
        assert_eq!(storage.get("k"), Some("v1".to_string()));

        storage.set("k", "v2");
        assert_eq!(storage.get("k"), Some("v2".to_string()));

        storage.remove("k");
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn test_remove_missing_key_is_silent() {
        let storage = InMemoryStorage::new();
        storage.remove("absent");
        assert_eq!(storage.get("absent"), None);
    }
}
