use super::KeyValueStore;

/// [`KeyValueStore`] backed by the browser's `window.localStorage`.
///
/// When the window or the storage area is unavailable, reads yield `None`
/// and writes are dropped.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            storage.set_item(key, value).ok();
        }
    }
}
