//! Key-Value Storage
//!
//! The one piece of state that outlives the tab is the theme flag in
//! `localStorage`. Access goes through [`KeyValueStore`] so the theme
//! logic can run against an in-memory store in tests.

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Unavailable storage or failed reads count
/// as "no stored value"; failed writes are logged and dropped.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(&"[STORAGE] localStorage unavailable".into());
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else { return };
        if storage.set_item(key, value).is_err() {
            web_sys::console::warn_1(&format!("[STORAGE] Failed to write {}", key).into());
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
