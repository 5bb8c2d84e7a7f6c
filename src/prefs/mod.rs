//! The one persisted preference: whether the tutorial has been seen.
//!
//! Storage sits behind `PreferenceStore` so a host can plug in whatever
//! key-value persistence it has. Two stores ship with the crate:
//! `MemoryStore` for tests and embedded hosts, and `JsonFileStore` which
//! keeps the values in a small JSON object on disk.
//!
//! ```
//! use card_dragon::prefs::{MemoryStore, TutorialFlag};
//!
//! let mut flag = TutorialFlag::new(MemoryStore::default());
//! assert!(!flag.has_seen().unwrap());
//! flag.mark_seen().unwrap();
//! assert!(flag.has_seen().unwrap());
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::PrefsError;

/// Key-value store for boolean preferences.
pub trait PreferenceStore {
    /// Stored value, or `None` if never set.
    fn get_bool(&self, key: &str) -> Result<Option<bool>, PrefsError>;

    /// Store a value.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError>;

    /// Forget a value.
    fn remove(&mut self, key: &str) -> Result<(), PrefsError>;
}

/// In-memory store. Nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, bool>,
}

impl PreferenceStore for MemoryStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, PrefsError> {
        Ok(self.values.get(key).copied())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object file, rewritten on every change.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl JsonFileStore {
    /// Open a store. A missing file is an empty store; it is created on
    /// the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PrefsError> {
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, PrefsError> {
        Ok(self.values.get(key).copied())
    }

    /// Memory is restored if the file write fails.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefsError> {
        let previous = self.values.insert(key.to_string(), value);
        self.flush().inspect_err(|_| {
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        let Some(old) = self.values.remove(key) else {
            return Ok(());
        };
        self.flush().inspect_err(|_| {
            self.values.insert(key.to_string(), old);
        })
    }
}

/// The "has the player seen the tutorial" flag.
#[derive(Clone, Debug)]
pub struct TutorialFlag<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> TutorialFlag<S> {
    /// Store key.
    pub const KEY: &'static str = "hasSeenTutorial";

    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Check if the tutorial was already shown. Unset means no.
    pub fn has_seen(&self) -> Result<bool, PrefsError> {
        Ok(self.store.get_bool(Self::KEY)?.unwrap_or(false))
    }

    /// Record that the tutorial was shown.
    pub fn mark_seen(&mut self) -> Result<(), PrefsError> {
        self.store.set_bool(Self::KEY, true)
    }

    /// Show the tutorial again next time.
    pub fn reset(&mut self) -> Result<(), PrefsError> {
        self.store.remove(Self::KEY)
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get_bool("k").unwrap(), None);
        store.set_bool("k", false).unwrap();
        assert_eq!(store.get_bool("k").unwrap(), Some(false));
        store.remove("k").unwrap();
        assert_eq!(store.get_bool("k").unwrap(), None);
    }

    #[test]
    fn test_flag_reset() {
        let mut flag = TutorialFlag::new(MemoryStore::default());
        flag.mark_seen().unwrap();
        flag.reset().unwrap();
        assert!(!flag.has_seen().unwrap());
    }
}
