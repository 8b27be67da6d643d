//! Settings service used by the page behaviours
//!
//! Preferences are plain strings under named slots, the same shape as
//! browser local storage. Callers receive the service explicitly instead of
//! reaching for a global.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::kv::Result;

/// Slot holding the user's theme preference
pub const THEME_KEY: &str = "theme";

/// Get/set access to string-valued preference slots
pub trait SettingsService: Send + Sync {
    /// Read a slot. `Ok(None)` when the slot has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Returns whether a value was present.
    fn remove(&self, key: &str) -> Result<bool>;
}

/// In-memory settings, for hosts without a disk and for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with the given slots
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            slots: RwLock::new(
                slots.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            ),
        }
    }

    /// Number of slots currently written
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Whether no slot has been written
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

impl SettingsService for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.slots.write().remove(key).is_some())
    }
}
