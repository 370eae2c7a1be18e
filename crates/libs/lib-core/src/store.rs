//! # Connection Store
//!
//! The single shared mutable resource: whether a wallet is connected, and its
//! display identity. A [`ConnectionStore`] is created once by the composition
//! root and handed by clone to every consumer; clones share the backend and the
//! subscriber list.
//!
//! ## Persisted Layout
//!
//! | Key | Value |
//! |---|---|
//! | `walletConnected` | `"true"` or absent |
//! | `walletAddress` | address string |
//! | `walletName` | wallet display name |
//!
//! ## Read Semantics
//!
//! Reads never fail. Absent, malformed or unreadable data is "not connected".
//!
//! ## Change Notification
//!
//! After each write the store re-reads the backend and, if the observable state
//! changed, broadcasts the new [`ConnectionState`] to all subscribers before
//! returning. Writes are whole-record: a failed key write rolls back the keys
//! written before it. Last writer wins.

use std::sync::Arc;

use parking_lot::Mutex;
use shared::dto::wallet::ConnectionState;
use tracing::{debug, warn};

use crate::broadcast::{Broadcast, Subscription};
use crate::error::{CoreError, Result};
use crate::storage::{KeyValueStorage, KEY_ADDRESS, KEY_CONNECTED, KEY_WALLET_NAME};

/// Display name used when the persisted record has an address but no name.
pub const UNKNOWN_WALLET_NAME: &str = "Unknown Wallet";

#[derive(Clone)]
pub struct ConnectionStore {
    backend: Arc<dyn KeyValueStorage>,
    changes: Broadcast<ConnectionState>,
    last_seen: Arc<Mutex<ConnectionState>>,
}

impl ConnectionStore {
    pub fn new(backend: Arc<dyn KeyValueStorage>) -> Self {
        let store = Self {
            backend,
            changes: Broadcast::new(),
            last_seen: Arc::new(Mutex::new(ConnectionState::disconnected())),
        };
        *store.last_seen.lock() = store.read();
        store
    }

    /// Current persisted state.
    pub fn read(&self) -> ConnectionState {
        let flag = self.get_or_none(KEY_CONNECTED);
        if flag.as_deref() != Some("true") {
            return ConnectionState::disconnected();
        }

        let address = self.get_or_none(KEY_ADDRESS).unwrap_or_default();
        if address.trim().is_empty() {
            debug!("walletConnected set without an address, treating as disconnected");
            return ConnectionState::disconnected();
        }

        let wallet_name = self
            .get_or_none(KEY_WALLET_NAME)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_WALLET_NAME.to_string());

        ConnectionState::connected(address, wallet_name)
    }

    pub fn is_connected(&self) -> bool {
        self.read().connected
    }

    /// Persist a connected record.
    pub fn connect(&self, address: &str, wallet_name: &str) -> Result<()> {
        if address.trim().is_empty() || wallet_name.trim().is_empty() {
            return Err(CoreError::InvalidState(
                "address and wallet name must be non-empty when connected".to_string(),
            ));
        }

        // Flag last: a partial write reads back as disconnected
        self.write_record(&[
            (KEY_ADDRESS, Some(address)),
            (KEY_WALLET_NAME, Some(wallet_name)),
            (KEY_CONNECTED, Some("true")),
        ])?;
        debug!(wallet = wallet_name, "connection state written");
        Ok(())
    }

    /// Clear the record. Calling it while disconnected changes nothing.
    pub fn disconnect(&self) -> Result<()> {
        // Flag first: a partial clear reads back as disconnected
        self.write_record(&[
            (KEY_CONNECTED, None),
            (KEY_ADDRESS, None),
            (KEY_WALLET_NAME, None),
        ])?;
        debug!("connection state cleared");
        Ok(())
    }

    /// Apply `writes` in order (`None` removes the key). If any of them fails
    /// the keys already touched get their previous values back, so a failed
    /// write never leaves a mixed record behind. Observers are refreshed
    /// either way.
    fn write_record(&self, writes: &[(&'static str, Option<&str>)]) -> Result<()> {
        let previous = writes
            .iter()
            .map(|(key, _)| Ok((*key, self.backend.get(key)?)))
            .collect::<Result<Vec<_>>>()?;

        for (applied, (key, value)) in writes.iter().enumerate() {
            let outcome = match value {
                Some(value) => self.backend.set(key, value),
                None => self.backend.remove(key),
            };
            if let Err(e) = outcome {
                warn!(key, error = %e, "storage write failed, rolling back");
                self.restore(&previous[..=applied]);
                self.refresh();
                return Err(e);
            }
        }

        self.refresh();
        Ok(())
    }

    fn restore(&self, previous: &[(&'static str, Option<String>)]) {
        for (key, value) in previous.iter().rev() {
            let outcome = match value {
                Some(value) => self.backend.set(key, value),
                None => self.backend.remove(key),
            };
            if let Err(e) = outcome {
                warn!(key, error = %e, "rollback failed");
            }
        }
    }

    /// Re-read the backend and broadcast if the state changed since the last
    /// broadcast. Used after writes and when another writer (another tab)
    /// touched the backend.
    pub fn refresh(&self) -> ConnectionState {
        let current = self.read();
        let changed = {
            let mut last_seen = self.last_seen.lock();
            if *last_seen != current {
                *last_seen = current.clone();
                true
            } else {
                false
            }
        };

        if changed {
            self.changes.emit(&current);
        }
        current
    }

    /// Observe every change of the persisted state.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ConnectionState) + Send + Sync + 'static,
    {
        self.changes.subscribe(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.changes.subscriber_count()
    }

    fn get_or_none(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "storage read failed, treating as absent");
                None
            }
        }
    }
}

impl std::fmt::Debug for ConnectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionStore")
            .field("state", &*self.last_seen.lock())
            .field("changes", &self.changes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(CoreError::Storage("quota".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(CoreError::Storage("quota".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(CoreError::Storage("quota".to_string()))
        }
    }

    #[test]
    fn test_empty_storage_reads_disconnected() {
        let store = ConnectionStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(store.read(), ConnectionState::disconnected());
    }

    #[test]
    fn test_flag_without_address_is_disconnected() {
        let storage = MemoryStorage::with_entries([(KEY_CONNECTED, "true")]);
        let store = ConnectionStore::new(Arc::new(storage));
        assert!(!store.is_connected());
    }

    #[test]
    fn test_flag_not_true_is_disconnected() {
        let storage = MemoryStorage::with_entries([
            (KEY_CONNECTED, "yes"),
            (KEY_ADDRESS, "GABC"),
            (KEY_WALLET_NAME, "Albedo"),
        ]);
        let store = ConnectionStore::new(Arc::new(storage));
        assert!(!store.is_connected());
    }

    #[test]
    fn test_missing_name_falls_back() {
        let storage = MemoryStorage::with_entries([(KEY_CONNECTED, "true"), (KEY_ADDRESS, "GABC")]);
        let store = ConnectionStore::new(Arc::new(storage));
        assert_eq!(store.read().wallet_name, UNKNOWN_WALLET_NAME);
    }

    /// Memory storage whose writes and removals of one key fail.
    struct FailingKey {
        inner: MemoryStorage,
        key: &'static str,
    }

    impl KeyValueStorage for FailingKey {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<()> {
            if key == self.key {
                return Err(CoreError::Storage("quota".to_string()));
            }
            self.inner.set(key, value)
        }
        fn remove(&self, key: &str) -> Result<()> {
            if key == self.key {
                return Err(CoreError::Storage("quota".to_string()));
            }
            self.inner.remove(key)
        }
    }

    fn existing_record(failing: &'static str) -> Arc<FailingKey> {
        Arc::new(FailingKey {
            inner: MemoryStorage::with_entries([
                (KEY_CONNECTED, "true"),
                (KEY_ADDRESS, "GEXISTING"),
                (KEY_WALLET_NAME, "Albedo"),
            ]),
            key: failing,
        })
    }

    #[test]
    fn test_failed_name_write_restores_previous_record() {
        // Arrange
        let storage = existing_record(KEY_WALLET_NAME);
        let store = ConnectionStore::new(storage.clone());
        let before = storage.inner.dump();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(move |state| sink.lock().push(state.clone()));

        // Act
        let result = store.connect("GNEWADDRESS", "Freighter");

        // Assert
        assert!(matches!(result, Err(CoreError::Storage(_))));
        assert_eq!(storage.inner.dump(), before);
        assert_eq!(store.read(), ConnectionState::connected("GEXISTING", "Albedo"));
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_failed_write_on_empty_storage_leaves_it_empty() {
        let storage = Arc::new(FailingKey {
            inner: MemoryStorage::new(),
            key: KEY_CONNECTED,
        });
        let store = ConnectionStore::new(storage.clone());

        assert!(store.connect("GNEWADDRESS", "Freighter").is_err());

        assert!(storage.inner.dump().is_empty());
        assert!(!store.is_connected());
    }

    #[test]
    fn test_failed_removal_restores_previous_record() {
        let storage = existing_record(KEY_ADDRESS);
        let store = ConnectionStore::new(storage.clone());
        let before = storage.inner.dump();

        assert!(store.disconnect().is_err());

        assert_eq!(storage.inner.dump(), before);
        assert!(store.is_connected());
    }

    #[test]
    fn test_unreadable_backend_is_disconnected() {
        let store = ConnectionStore::new(Arc::new(BrokenStorage));
        assert_eq!(store.read(), ConnectionState::disconnected());
        assert!(store.connect("GABC", "Freighter").is_err());
    }

    #[test]
    fn test_connect_rejects_empty_fields() {
        let store = ConnectionStore::new(Arc::new(MemoryStorage::new()));
        assert!(matches!(
            store.connect("", "Freighter"),
            Err(CoreError::InvalidState(_))
        ));
        assert!(!store.is_connected());
    }

    #[test]
    fn test_disconnect_notifies_once() {
        let store = ConnectionStore::new(Arc::new(MemoryStorage::new()));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(move |state| sink.lock().push(state.connected));

        store.connect("GABC", "Freighter").unwrap();
        store.disconnect().unwrap();
        store.disconnect().unwrap();

        assert_eq!(*seen.lock(), vec![true, false]);
    }

    #[test]
    fn test_refresh_picks_up_external_write() {
        // Arrange
        let storage = Arc::new(MemoryStorage::new());
        let store = ConnectionStore::new(storage.clone());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(move |state| sink.lock().push(state.address.clone()));

        // Act: another tab writes the same keys
        storage.set(KEY_ADDRESS, "GOTHERTAB").unwrap();
        storage.set(KEY_CONNECTED, "true").unwrap();
        let state = store.refresh();
        store.refresh();

        // Assert
        assert!(state.connected);
        assert_eq!(*seen.lock(), vec!["GOTHERTAB".to_string()]);
    }
}
