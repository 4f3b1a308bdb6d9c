use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::FilterError;
use super::value::FilterSet;

/// `getItem` / `setItem` style persistent storage
pub trait KeyValueStorage: Send + Sync + 'static {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterError>;
    fn remove_item(&self, key: &str);
}

/// Browser `localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterError> {
        let storage =
            local_storage().ok_or_else(|| FilterError::Storage("no localStorage".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| FilterError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("cannot remove '{}' from localStorage: {:?}", key, e);
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.lock().remove(key);
    }
}

/// Read a JSON value; missing or corrupt entries read as `None`
pub fn load_json<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Option<T> {
    let raw = storage.get_item(key)?;
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unreadable '{}' in storage: {}", key, e);
            None
        }
    }
}

pub fn save_json<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<(), FilterError> {
    let raw = serde_json::to_string(value)?;
    storage.set_item(key, &raw)
}

/// Last-applied filter set of one page
pub trait FilterSnapshot: Send + Sync + 'static {
    fn load(&self) -> Option<FilterSet>;
    fn save(&self, filters: &FilterSet);
}

/// [`FilterSnapshot`] kept as JSON under a page-specific storage key
#[derive(Clone, Debug)]
pub struct PersistedFilters<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> PersistedFilters<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: KeyValueStorage> FilterSnapshot for PersistedFilters<S> {
    fn load(&self) -> Option<FilterSet> {
        load_json(&self.storage, &self.key)
    }

    fn save(&self, filters: &FilterSet) {
        if let Err(e) = save_json(&self.storage, &self.key, filters) {
            log::warn!("cannot persist filters under '{}': {}", self.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_survives_new_instance() {
        let storage = MemoryStorage::new();
        PersistedFilters::new(storage.clone(), "external-filters")
            .save(&FilterSet::new().with("name", "ann"));

        let reloaded = PersistedFilters::new(storage, "external-filters").load();
        assert_eq!(reloaded, Some(FilterSet::new().with("name", "ann")));
    }

    #[test]
    fn test_corrupt_snapshot_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.set_item("external-filters", "{not json").unwrap();
        assert_eq!(PersistedFilters::new(storage, "external-filters").load(), None);
    }

    #[test]
    fn test_remove_item() {
        let storage = MemoryStorage::new();
        save_json(&storage, "k", &vec![1, 2]).unwrap();
        assert_eq!(load_json::<Vec<i32>>(&storage, "k"), Some(vec![1, 2]));
        storage.remove_item("k");
        assert_eq!(storage.get_item("k"), None);
    }
}
