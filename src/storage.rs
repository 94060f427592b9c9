//! Durable single-key preference storage.
//!
//! `localStorage` backs the preference in the browser. When storage is
//! unavailable (private mode, sandboxed frames, native tests) an in-memory
//! store stands in for the page session, so callers never branch on it.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage rejected write for {key}: {reason}")]
    Rejected { key: String, reason: String },
}

/// Key-value store for small string preferences.
pub trait PreferenceStore {
    /// Read `key`. Read failures are indistinguishable from absence.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Rejected`] when the backend refuses the write
    /// (quota exceeded, storage disabled).
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// Session-scoped store used when durable storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// One named preference inside a [`PreferenceStore`].
#[derive(Debug)]
pub struct Preference<S> {
    key: &'static str,
    store: S,
}

impl<S: PreferenceStore> Preference<S> {
    pub fn new(key: &'static str, store: S) -> Self {
        Self { key, store }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn load(&self) -> Option<String> {
        self.store.read(self.key)
    }

    /// Persist `value`.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`StoreError`].
    pub fn save(&self, value: &str) -> Result<(), StoreError> {
        self.store.write(self.key, value)
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the window's local storage, or `None` when access is denied.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StoreError::Rejected { key: key.to_owned(), reason: crate::dom::describe(&err) })
    }
}

/// The best store available to this page: local storage, else memory.
#[cfg(feature = "hydrate")]
pub fn page_store() -> Box<dyn PreferenceStore> {
    match LocalStore::open() {
        Some(store) => Box::new(store),
        None => {
            log::debug!("localStorage unavailable; preferences last for this session only");
            Box::new(MemoryStore::default())
        }
    }
}
