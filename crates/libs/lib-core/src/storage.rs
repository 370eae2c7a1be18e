//! Key/value persistence backend for the connection store.
//!
//! The browser implementation (local storage) lives in `card-web`; this crate
//! ships [`MemoryStorage`] for tests and non-browser hosts.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::Result;

/// Persisted key: connection flag, `"true"` or absent.
pub const KEY_CONNECTED: &str = "walletConnected";
/// Persisted key: wallet address.
pub const KEY_ADDRESS: &str = "walletAddress";
/// Persisted key: wallet display name.
pub const KEY_WALLET_NAME: &str = "walletName";

/// String key/value storage with browser local-storage semantics.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with raw entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Copy of every entry, for byte-for-byte comparisons in tests.
    pub fn dump(&self) -> HashMap<String, String> {
        self.entries.lock().clone()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        storage.set(KEY_ADDRESS, "GABC").unwrap();
        assert_eq!(storage.get(KEY_ADDRESS).unwrap().as_deref(), Some("GABC"));

        storage.remove(KEY_ADDRESS).unwrap();
        assert_eq!(storage.get(KEY_ADDRESS).unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove(KEY_CONNECTED).is_ok());
    }
}
