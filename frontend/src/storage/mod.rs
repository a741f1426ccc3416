//! Local persistence fallback for submitted contacts.
//!
//! When the form has no submit handler wired in, contacts are appended to an
//! ordered list serialized as JSON under a single fixed key. The backend is
//! abstracted behind [`KeyValueStore`] so the append logic runs against a
//! plain map in tests; [`LocalStorage`] is the browser implementation.

mod local;

pub use local::LocalStorage;

use common::model::contact::StoredContact;

/// Key under which the serialized contact list is persisted.
pub const STORAGE_KEY: &str = "contactos";

/// Minimal key/value backend. Reads of absent keys return `None`; writes
/// are fire-and-forget.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (*self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (*self).set(key, value)
    }
}

/// The ordered contact list persisted under [`STORAGE_KEY`].
pub struct ContactStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ContactStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Reads the full list. A missing or unparseable value is an empty list.
    pub fn load(&self) -> Vec<StoredContact> {
        self.backend
            .get(STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Appends one contact and writes the whole list back.
    pub fn append(&self, contact: StoredContact) {
        let mut contacts = self.load();
        contacts.push(contact);
        if let Ok(raw) = serde_json::to_string(&contacts) {
            self.backend.set(STORAGE_KEY, &raw);
        }
    }
}
