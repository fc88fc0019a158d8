//! Durable client-side key/value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the user record into `localStorage`; the dashboard
//! reads it at startup and removes it at logout. `BrowserStorage` is the
//! hydrate-only implementation and does nothing during SSR; `MemoryStorage`
//! is the in-process stand-in the controller is driven with natively.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// String slots keyed by name. The dashboard only reads and removes; the
/// login page owns writes. Removal is best-effort.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn remove_item(&self, key: &str);
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot, as the login page would.
    pub fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Outcome of reading a JSON slot.
#[derive(Debug, PartialEq)]
pub enum JsonSlot<T> {
    Missing,
    Corrupt(String),
    Present(T),
}

/// Load and parse the JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> JsonSlot<T> {
    let Some(raw) = storage.get_item(key) else {
        return JsonSlot::Missing;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => JsonSlot::Present(value),
        Err(e) => JsonSlot::Corrupt(e.to_string()),
    }
}
