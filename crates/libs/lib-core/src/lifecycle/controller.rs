//! # Lifecycle Controller
//!
//! Drives one attempt at a time through Select → Authorize → Verify → Complete
//! and keeps a [`ControllerState`] snapshot that views render from.
//!
//! ## Attempt Rules
//!
//! - Unavailable wallets never start an attempt; the caller gets the help URL.
//! - A second `connect` while one is in flight returns [`ConnectOutcome::InProgress`].
//! - A rejection resets the phase to `Select`, exposes the error and leaves the
//!   store untouched.
//! - Success writes the store exactly once, after the phase reached `Complete`.
//! - [`cancel`](LifecycleController::cancel), [`disconnect`](LifecycleController::disconnect)
//!   or dropping the attempt future stops it before any further write.
//!
//! ## Store Coupling
//!
//! The controller listens to the [`ConnectionStore`] so a disconnect made
//! anywhere else (header button, another tab) clears its summary too.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use parking_lot::Mutex;
use serde::Serialize;
use shared::dto::wallet::{ConnectedWallet, ConnectionState, NetworkStatus, WalletOption};
use tracing::{debug, info, warn};

use super::timer::Sleeper;
use super::wallet::WalletCapability;
use super::Phase;
use crate::broadcast::{Broadcast, Subscription};
use crate::catalog;
use crate::config::Config;
use crate::error::{ConnectionError, ConnectionErrorKind, CoreError, Result};
use crate::store::ConnectionStore;

/// Everything a connection view needs to render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControllerState {
    pub phase: Phase,
    pub connecting: bool,
    /// Wallet chosen for the current or most recent attempt
    pub wallet_id: Option<String>,
    pub error: Option<ConnectionError>,
    pub connected: Option<ConnectedWallet>,
}

/// How a call to [`LifecycleController::connect`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectOutcome {
    Connected(ConnectedWallet),
    Failed(ConnectionError),
    /// The wallet cannot be used here; send the user to `help_url` instead.
    Unavailable { help_url: String },
    Cancelled,
    /// Another attempt is already running.
    InProgress,
}

#[derive(Clone)]
pub struct LifecycleController {
    inner: Arc<Inner>,
}

struct Inner {
    store: ConnectionStore,
    wallet: Arc<dyn WalletCapability>,
    sleeper: Arc<dyn Sleeper>,
    catalog: Vec<WalletOption>,
    config: Config,
    state: Mutex<ControllerState>,
    in_flight: Mutex<Option<(u64, AbortHandle)>>,
    next_attempt: AtomicU64,
    changes: Broadcast<ControllerState>,
    store_subscription: Mutex<Option<Subscription>>,
}

impl LifecycleController {
    pub fn new(
        store: ConnectionStore,
        wallet: Arc<dyn WalletCapability>,
        sleeper: Arc<dyn Sleeper>,
        catalog: Vec<WalletOption>,
        config: Config,
    ) -> Self {
        let inner = Arc::new(Inner {
            store,
            wallet,
            sleeper,
            catalog,
            config,
            state: Mutex::new(ControllerState::default()),
            in_flight: Mutex::new(None),
            next_attempt: AtomicU64::new(0),
            changes: Broadcast::new(),
            store_subscription: Mutex::new(None),
        });

        let weak = Arc::downgrade(&inner);
        let subscription = inner.store.subscribe(move |persisted| {
            if let Some(inner) = weak.upgrade() {
                inner.on_store_change(persisted);
            }
        });
        *inner.store_subscription.lock() = Some(subscription);

        Self { inner }
    }

    /// Start an attempt for `wallet` and drive it to the end.
    pub async fn connect(&self, wallet: &WalletOption) -> ConnectOutcome {
        if !wallet.is_available() {
            info!(wallet = %wallet.id, "wallet unavailable, redirecting to help");
            return ConnectOutcome::Unavailable {
                help_url: self.inner.config.help_url.clone(),
            };
        }

        let (guard, registration) = {
            let mut in_flight = self.inner.in_flight.lock();
            if in_flight.is_some() {
                debug!(wallet = %wallet.id, "attempt already in flight");
                return ConnectOutcome::InProgress;
            }
            let id = self.inner.next_attempt.fetch_add(1, Ordering::Relaxed);
            let (handle, registration) = AbortHandle::new_pair();
            *in_flight = Some((id, handle));
            (
                AttemptGuard {
                    inner: self.inner.clone(),
                    id,
                },
                registration,
            )
        };

        info!(wallet = %wallet.id, "connection attempt started");
        self.inner.update(|state| {
            state.phase = Phase::Select;
            state.connecting = true;
            state.wallet_id = Some(wallet.id.clone());
            state.error = None;
        });

        let inner = self.inner.clone();
        let wallet = wallet.clone();
        let attempt = Abortable::new(async move { inner.run_attempt(wallet).await }, registration);

        let outcome = match attempt.await {
            Ok(outcome) => outcome,
            Err(_aborted) => ConnectOutcome::Cancelled,
        };
        drop(guard);
        outcome
    }

    /// [`connect`](Self::connect) by catalog id.
    pub async fn connect_by_id(&self, wallet_id: &str) -> Result<ConnectOutcome> {
        let wallet = catalog::find(&self.inner.catalog, wallet_id)
            .cloned()
            .ok_or_else(|| CoreError::UnknownWallet(wallet_id.to_string()))?;
        Ok(self.connect(&wallet).await)
    }

    /// Clear the error and start over with the previously chosen wallet.
    ///
    /// Returns `None` when no wallet was chosen yet.
    pub async fn retry(&self) -> Option<ConnectOutcome> {
        if self.inner.in_flight.lock().is_some() {
            return Some(ConnectOutcome::InProgress);
        }

        let wallet_id = self.inner.state.lock().wallet_id.clone()?;
        let wallet = catalog::find(&self.inner.catalog, &wallet_id)?.clone();
        self.dismiss_error();
        Some(self.connect(&wallet).await)
    }

    /// Hide the error panel and return to `Select`.
    pub fn dismiss_error(&self) {
        self.inner.update(|state| {
            state.error = None;
            if !state.connecting {
                state.phase = Phase::Select;
            }
        });
    }

    /// Abort the in-flight attempt, if any. Nothing is written afterwards.
    pub fn cancel(&self) -> bool {
        let Some((id, handle)) = self.inner.in_flight.lock().take() else {
            return false;
        };
        handle.abort();
        info!(attempt = id, "connection attempt cancelled");
        self.inner.update(|state| {
            state.connecting = false;
            state.phase = Phase::Select;
        });
        true
    }

    /// Cancel any attempt, release the wallet and clear the persisted state.
    pub fn disconnect(&self) -> Result<()> {
        self.cancel();
        self.inner.wallet.disconnect();
        self.inner.store.disconnect()?;
        self.inner.update(|state| {
            state.connected = None;
            state.error = None;
            state.phase = Phase::Select;
        });
        info!("wallet disconnected");
        Ok(())
    }

    /// Pick up a connection persisted by an earlier session.
    pub fn resume(&self) -> ControllerState {
        let persisted = self.inner.store.read();
        self.inner.on_store_change(&persisted);
        self.snapshot()
    }

    /// Keep the persisted address in step with the wallet's active account.
    pub fn follow_account_changes(&self) -> Subscription {
        let store = self.inner.store.clone();
        self.inner.wallet.on_account_change(Box::new(move |account| {
            let current = store.read();
            if !current.connected || current.address == account.address {
                return;
            }
            if let Err(e) = store.connect(&account.address, &current.wallet_name) {
                warn!(error = %e, "failed to persist account change");
            }
        }))
    }

    pub fn snapshot(&self) -> ControllerState {
        self.inner.state.lock().clone()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ControllerState) + Send + Sync + 'static,
    {
        self.inner.changes.subscribe(callback)
    }

    pub fn store(&self) -> &ConnectionStore {
        &self.inner.store
    }

    pub fn catalog(&self) -> &[WalletOption] {
        &self.inner.catalog
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}

impl std::fmt::Debug for LifecycleController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleController")
            .field("state", &*self.inner.state.lock())
            .field("store", &self.inner.store)
            .finish()
    }
}

impl Inner {
    async fn run_attempt(&self, wallet: WalletOption) -> ConnectOutcome {
        self.sleeper.sleep(millis(self.config.select_delay_ms)).await;
        self.set_phase(Phase::Authorize);

        self.sleeper.sleep(millis(self.config.authorize_delay_ms)).await;
        let account = match self.wallet.connect(&wallet).await {
            Ok(account) => account,
            Err(error) => {
                warn!(wallet = %wallet.id, kind = ?error.kind, "connection attempt failed");
                return self.fail(error);
            }
        };

        self.set_phase(Phase::Verify);
        self.sleeper.sleep(millis(self.config.verify_delay_ms)).await;
        self.set_phase(Phase::Complete);

        if let Err(e) = self.store.connect(&account.address, &wallet.name) {
            warn!(error = %e, "could not persist connection");
            return self.fail(ConnectionError::new(
                ConnectionErrorKind::Unknown,
                format!("Failed to save wallet connection: {}", e),
            ));
        }

        let summary = ConnectedWallet {
            name: wallet.name.clone(),
            address: account.address,
            balance: account.balance,
            network_status: NetworkStatus::Connected,
        };
        self.update(|state| {
            state.connecting = false;
            state.connected = Some(summary.clone());
        });
        info!(wallet = %wallet.id, "wallet connected");
        ConnectOutcome::Connected(summary)
    }

    fn fail(&self, error: ConnectionError) -> ConnectOutcome {
        self.update(|state| {
            state.phase = Phase::Select;
            state.connecting = false;
            state.error = Some(error.clone());
        });
        ConnectOutcome::Failed(error)
    }

    fn set_phase(&self, phase: Phase) {
        debug!(?phase, "phase advanced");
        self.update(|state| state.phase = phase);
    }

    fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut ControllerState),
    {
        let snapshot = {
            let mut state = self.state.lock();
            mutate(&mut state);
            state.clone()
        };
        self.changes.emit(&snapshot);
    }

    fn on_store_change(&self, persisted: &ConnectionState) {
        let snapshot = {
            let mut state = self.state.lock();
            // The running attempt owns the state until it settles
            if state.connecting {
                return;
            }

            if persisted.connected {
                let unchanged = state.connected.as_ref().is_some_and(|current| {
                    current.address == persisted.address && current.name == persisted.wallet_name
                });
                if unchanged {
                    return;
                }
                let balance = state
                    .connected
                    .as_ref()
                    .map(|current| current.balance.clone())
                    .unwrap_or_else(|| self.config.mock_balance.clone());
                state.connected = Some(ConnectedWallet {
                    name: persisted.wallet_name.clone(),
                    address: persisted.address.clone(),
                    balance,
                    network_status: NetworkStatus::Connected,
                });
                state.phase = Phase::Complete;
                state.error = None;
            } else {
                if state.connected.is_none() {
                    return;
                }
                state.connected = None;
                state.phase = Phase::Select;
            }
            state.clone()
        };
        self.changes.emit(&snapshot);
    }
}

/// Releases the in-flight slot when the attempt future settles or is dropped.
struct AttemptGuard {
    inner: Arc<Inner>,
    id: u64,
}

impl Drop for AttemptGuard {
    fn drop(&mut self) {
        let released = {
            let mut in_flight = self.inner.in_flight.lock();
            match in_flight.as_ref() {
                Some((id, _)) if *id == self.id => {
                    in_flight.take();
                    true
                }
                _ => false,
            }
        };

        if released && self.inner.state.lock().connecting {
            debug!(attempt = self.id, "attempt dropped before settling");
            self.inner.update(|state| {
                state.connecting = false;
                state.phase = Phase::Select;
            });
        }
    }
}

fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}
