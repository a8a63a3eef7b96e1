//! Favorite cafés, remembered on this device only.
//!
//! The set of ids is stored as a JSON string array under one key. The store
//! is built once per client session and handed to the views that need it.

use leptos::logging::warn;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use thiserror::Error;

pub const FAVORITES_KEY: &str = "brewstop-favorites";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value storage that outlives the page, like `localStorage`.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage; used on the server and in tests. Clones share contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The browser's `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("[FAVORITES] localStorage unavailable, favorites will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Storage backing favorites for the current build target.
#[cfg(target_arch = "wasm32")]
pub type ClientStore = BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub type ClientStore = MemoryStore;

#[derive(Debug, Clone, Default)]
pub struct FavoritesStore<S> {
    storage: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current favorites. Missing or unreadable storage reads as empty.
    pub fn list(&self) -> BTreeSet<String> {
        let Some(raw) = self.storage.read(FAVORITES_KEY) else {
            return BTreeSet::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                warn!("[FAVORITES] Ignoring malformed favorites: {}", err);
                BTreeSet::new()
            }
        }
    }

    pub fn contains(&self, cafe_id: &str) -> bool {
        self.list().contains(cafe_id)
    }

    pub fn add(&self, cafe_id: &str) -> Result<(), StorageError> {
        let mut ids = self.list();
        if ids.insert(cafe_id.to_string()) {
            self.save(&ids)?;
        }
        Ok(())
    }

    pub fn remove(&self, cafe_id: &str) -> Result<(), StorageError> {
        let mut ids = self.list();
        if ids.remove(cafe_id) {
            self.save(&ids)?;
        }
        Ok(())
    }

    /// Flips membership of `cafe_id` and returns whether it is now a favorite.
    pub fn toggle(&self, cafe_id: &str) -> Result<bool, StorageError> {
        if self.contains(cafe_id) {
            self.remove(cafe_id)?;
            Ok(false)
        } else {
            self.add(cafe_id)?;
            Ok(true)
        }
    }

    fn save(&self, ids: &BTreeSet<String>) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(ids)?;
        self.storage.write(FAVORITES_KEY, &encoded)
    }
}
