//! Pluggable storage backends
//!
//! The store never touches the medium directly; everything goes through a
//! [`Storage`] handle passed in by the host. Tests and native hosts use
//! [`MemoryStorage`]; the web build uses browser LocalStorage. Every
//! operation is fail-open: an unavailable medium reads as empty and swallows
//! writes, so losing the ability to save never blocks play.

use std::collections::HashMap;

/// String key/value storage with LocalStorage-shaped semantics.
pub trait Storage {
    /// Value under `key`, or `None` when absent or the medium fails.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Failures (quota, private mode) are
    /// swallowed; the write is fire-and-forget.
    fn set_item(&mut self, key: &str, value: &str);

    /// Remove `key` if present.
    fn remove_item(&mut self, key: &str);
}

/// In-memory backend for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// Browser LocalStorage backend (wasm32 only).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::raw().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(s) = Self::raw() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove_item(&mut self, key: &str) {
        if let Some(s) = Self::raw() {
            let _ = s.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut s = MemoryStorage::new();
        assert!(s.is_empty());
        assert_eq!(s.get_item("a"), None);

        s.set_item("a", "1");
        s.set_item("a", "2");
        s.set_item("b", "3");
        assert_eq!(s.get_item("a").as_deref(), Some("2"));
        assert_eq!(s.len(), 2);

        s.remove_item("a");
        assert_eq!(s.get_item("a"), None);
        // Removing an absent key is a no-op
        s.remove_item("a");
        assert_eq!(s.len(), 1);
    }
}
