use gloo_storage::{LocalStorage, Storage};

use stanza::errors::StoreError;
use stanza::session::TokenStore;

/// Keeps the session token in the browser's local storage.
///
/// The token is stored raw rather than JSON-encoded so other clients of the
/// same backend can share it.
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(&self.key, token)
            .map_err(|err| StoreError::Storage(format!("{err:?}")))
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}
