//! String key/value storage backends.

use crate::SessionError;
use std::collections::HashMap;

/// A string key/value store such as browser local storage.
pub trait KeyValueStore {
    /// Get a value. Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Set a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Delete a value. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), SessionError>;
}

/// In-memory store for tests and non-browser targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding the given entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Browser `window.localStorage`.
pub struct BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    storage: web_sys::Storage,
    #[cfg(not(target_arch = "wasm32"))]
    _phantom: std::marker::PhantomData<()>,
}

impl BrowserStorage {
    /// Open the window's local storage.
    #[cfg(target_arch = "wasm32")]
    pub fn local() -> Result<Self, SessionError> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::StorageUnavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| SessionError::StorageUnavailable(format!("{e:?}")))?
            .ok_or_else(|| SessionError::StorageUnavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }

    // Non-WASM builds have no browser storage
    #[cfg(not(target_arch = "wasm32"))]
    pub fn local() -> Result<Self, SessionError> {
        Err(SessionError::StorageUnavailable(
            "not running in a browser".to_string(),
        ))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.storage
            .remove_item(key)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, SessionError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), SessionError> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<(), SessionError> {
        Ok(())
    }
}
