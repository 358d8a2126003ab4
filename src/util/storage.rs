//! Key-value persistence for the theme flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LocalStore` centralizes hydrate-only `localStorage` glue; `MemoryStore`
//! backs non-browser hosts and tests with the same trait.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Durable string storage keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Reads return `None` and writes are dropped when
/// storage is unavailable (private browsing, SSR, native builds).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return None;
            };
            let Ok(Some(storage)) = window.local_storage() else {
                return None;
            };
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("localStorage read {key} failed: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Ok(Some(storage)) = window.local_storage() else {
                log::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("localStorage write {key} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store for non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
