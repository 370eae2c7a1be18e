//! # Connection Scenarios
//!
//! End-to-end behavior through the public API: store, controller and guards
//! wired the way the web app wires them.

use std::sync::Arc;

use lib_core::catalog::{default_catalog, find};
use lib_core::guard::{evaluate, GuardDecision, Route, RouteGuard};
use lib_core::lifecycle::{
    AlwaysApprove, AlwaysReject, ImmediateSleeper, OutcomeStrategy, SimulatedWallet,
};
use lib_core::storage::{KeyValueStorage, MemoryStorage, KEY_ADDRESS, KEY_CONNECTED, KEY_WALLET_NAME};
use lib_core::{
    Config, ConnectOutcome, ConnectionErrorKind, ConnectionStore, CoreError, LifecycleController, Phase,
};
use parking_lot::Mutex;
use shared::dto::wallet::ConnectionState;

fn setup<O: OutcomeStrategy + 'static>(
    outcome: O,
    storage: Arc<dyn KeyValueStorage>,
) -> (ConnectionStore, LifecycleController) {
    let config = Config::default();
    let store = ConnectionStore::new(storage);
    let controller = LifecycleController::new(
        store.clone(),
        Arc::new(SimulatedWallet::from_config(Arc::new(outcome), &config)),
        Arc::new(ImmediateSleeper),
        default_catalog(),
        config,
    );
    (store, controller)
}

fn phase_log(controller: &LifecycleController) -> (Arc<Mutex<Vec<usize>>>, lib_core::Subscription) {
    let log = Arc::new(Mutex::new(vec![controller.snapshot().phase.index()]));
    let sink = log.clone();
    let sub = controller.subscribe(move |state| {
        let mut log = sink.lock();
        if log.last() != Some(&state.phase.index()) {
            log.push(state.phase.index());
        }
    });
    (log, sub)
}

#[tokio::test]
async fn scenario_a_forced_success() {
    // Arrange
    let (store, controller) = setup(AlwaysApprove, Arc::new(MemoryStorage::new()));
    assert!(!store.read().connected);
    let (phases, _sub) = phase_log(&controller);

    // Act
    let outcome = controller.connect_by_id("freighter").await.unwrap();

    // Assert
    assert!(matches!(outcome, ConnectOutcome::Connected(_)));
    assert_eq!(*phases.lock(), vec![0, 1, 2, 3]);
    let state = store.read();
    assert!(state.connected);
    assert_eq!(state.wallet_name, "Freighter");
}

#[tokio::test]
async fn scenario_b_forced_failure() {
    // Arrange
    let storage = Arc::new(MemoryStorage::new());
    let (store, controller) = setup(AlwaysReject, storage.clone());
    let before = storage.dump();

    // Act
    let outcome = controller.connect_by_id("freighter").await.unwrap();

    // Assert
    let ConnectOutcome::Failed(error) = outcome else {
        panic!("expected failure, got {:?}", outcome);
    };
    assert_eq!(error.kind, ConnectionErrorKind::Permission);
    assert!(!store.read().connected);
    assert_eq!(storage.dump(), before);
    assert_eq!(controller.snapshot().phase.index(), 0);
}

#[test]
fn scenario_c_disconnect() {
    // Arrange
    let storage = Arc::new(MemoryStorage::with_entries([
        (KEY_CONNECTED, "true"),
        (KEY_ADDRESS, "ABCXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXWXYZ"),
        (KEY_WALLET_NAME, "Freighter"),
    ]));
    let (store, controller) = setup(AlwaysApprove, storage);
    assert!(store.read().connected);

    // Act
    controller.disconnect().unwrap();

    // Assert
    let state = store.read();
    assert!(!state.connected);
    assert_eq!(state.address, "");
    assert_eq!(state.wallet_name, "");
}

#[test]
fn scenario_d_dashboard_redirects() {
    let (store, _controller) = setup(AlwaysApprove, Arc::new(MemoryStorage::new()));
    let redirects = Arc::new(Mutex::new(Vec::new()));
    let sink = redirects.clone();

    let (decision, _sub) = RouteGuard::watch(
        &store,
        Route::from_path("/dashboard-smart-contract-hub"),
        move |target| sink.lock().push(target.path()),
    );

    assert_eq!(decision, GuardDecision::Redirect(Route::WalletConnection));
    assert_eq!(*redirects.lock(), vec!["/wallet-connection-authentication"]);
}

#[tokio::test]
async fn unavailable_wallets_never_touch_state() {
    let catalog = default_catalog();
    for option in catalog.iter().filter(|w| !w.is_available()) {
        let storage = Arc::new(MemoryStorage::new());
        let (_store, controller) = setup(AlwaysApprove, storage.clone());
        let (phases, _sub) = phase_log(&controller);

        let outcome = controller.connect(option).await;

        assert!(matches!(outcome, ConnectOutcome::Unavailable { .. }));
        assert!(storage.dump().is_empty());
        assert_eq!(*phases.lock(), vec![0]);
    }
}

#[tokio::test]
async fn every_success_persists_address_and_name() {
    let catalog = default_catalog();
    for option in catalog.iter().filter(|w| w.is_available()) {
        let (store, controller) = setup(AlwaysApprove, Arc::new(MemoryStorage::new()));

        controller.connect(option).await;

        let state = store.read();
        assert!(state.connected, "{} should connect", option.id);
        assert!(!state.address.is_empty());
        assert_eq!(state.wallet_name, option.name);
    }
}

#[tokio::test]
async fn failure_preserves_existing_connection() {
    let storage = Arc::new(MemoryStorage::with_entries([
        (KEY_CONNECTED, "true"),
        (KEY_ADDRESS, "GEXISTING"),
        (KEY_WALLET_NAME, "Albedo"),
    ]));
    let (_store, controller) = setup(AlwaysReject, storage.clone());
    let before = storage.dump();

    let wallet = find(&default_catalog(), "freighter").cloned().unwrap();
    controller.connect(&wallet).await;

    assert_eq!(storage.dump(), before);
}

#[test]
fn disconnect_is_idempotent() {
    let storage = Arc::new(MemoryStorage::new());
    let (store, controller) = setup(AlwaysApprove, storage.clone());

    controller.disconnect().unwrap();
    controller.disconnect().unwrap();

    assert_eq!(store.read(), ConnectionState::disconnected());
    assert!(storage.dump().is_empty());
}

#[tokio::test]
async fn connect_then_disconnect_round_trips() {
    let storage = Arc::new(MemoryStorage::new());
    let (store, controller) = setup(AlwaysApprove, storage.clone());
    let initial = store.read();

    controller.connect_by_id("albedo").await.unwrap();
    assert!(controller.snapshot().connected.is_some());
    controller.disconnect().unwrap();

    assert_eq!(store.read(), initial);
    assert!(storage.dump().is_empty());
    assert!(controller.snapshot().connected.is_none());
    assert!(controller.snapshot().error.is_none());
}

#[test]
fn gated_screens_redirect_when_disconnected() {
    let disconnected = ConnectionState::disconnected();
    for path in [
        "/dashboard-smart-contract-hub",
        "/card-creation-management",
        "/marketplace-trading-hub",
        "/transaction-history-analytics",
    ] {
        assert_eq!(
            evaluate(Route::from_path(path), &disconnected),
            GuardDecision::Redirect(Route::WalletConnection),
            "{} must not render",
            path
        );
    }
}

#[test]
fn two_observers_see_one_write() {
    let storage = Arc::new(MemoryStorage::new());
    let store = ConnectionStore::new(storage);
    let header = store.clone();
    let page = store.clone();

    let header_view = Arc::new(Mutex::new(header.read()));
    let sink = header_view.clone();
    let _header_sub = header.subscribe(move |state| *sink.lock() = state.clone());

    page.connect("GOBSERVED", "Freighter").unwrap();

    assert!(header_view.lock().connected);
    assert_eq!(header.read(), page.read());
}

#[tokio::test]
async fn disconnect_redirects_every_mounted_guard() {
    let (store, controller) = setup(AlwaysApprove, Arc::new(MemoryStorage::new()));
    controller.connect_by_id("freighter").await.unwrap();

    let redirects = Arc::new(Mutex::new(Vec::new()));
    let subs: Vec<_> = [Route::Dashboard, Route::Marketplace, Route::Landing]
        .into_iter()
        .map(|route| {
            let sink = redirects.clone();
            let (decision, sub) = RouteGuard::watch(&store, route, move |_| sink.lock().push(route));
            assert_eq!(decision, GuardDecision::Render);
            sub
        })
        .collect();

    controller.disconnect().unwrap();

    assert_eq!(*redirects.lock(), vec![Route::Dashboard, Route::Marketplace]);
    drop(subs);
}

#[test]
fn malformed_storage_reads_disconnected() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(KEY_CONNECTED, "TRUE").unwrap();
    storage.set(KEY_ADDRESS, "GABC").unwrap();
    let store = ConnectionStore::new(storage);

    assert_eq!(store.read(), ConnectionState::disconnected());
}

/// Local storage that hits its quota on one key only.
struct QuotaOnKey {
    inner: MemoryStorage,
    key: &'static str,
}

impl QuotaOnKey {
    fn existing(key: &'static str) -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryStorage::with_entries([
                (KEY_CONNECTED, "true"),
                (KEY_ADDRESS, "GEXISTING"),
                (KEY_WALLET_NAME, "Albedo"),
            ]),
            key,
        })
    }

    fn check(&self, key: &str) -> lib_core::Result<()> {
        if key == self.key {
            return Err(CoreError::Storage(format!("quota exceeded writing {}", key)));
        }
        Ok(())
    }
}

impl KeyValueStorage for QuotaOnKey {
    fn get(&self, key: &str) -> lib_core::Result<Option<String>> {
        self.inner.get(key)
    }
    fn set(&self, key: &str, value: &str) -> lib_core::Result<()> {
        self.check(key)?;
        self.inner.set(key, value)
    }
    fn remove(&self, key: &str) -> lib_core::Result<()> {
        self.check(key)?;
        self.inner.remove(key)
    }
}

#[tokio::test]
async fn failed_save_leaves_connection_state_unchanged() {
    // Arrange
    let storage = QuotaOnKey::existing(KEY_WALLET_NAME);
    let (store, controller) = setup(AlwaysApprove, storage.clone());
    let before_entries = storage.inner.dump();
    let before_state = store.read();
    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = observed.clone();
    let _sub = store.subscribe(move |state| sink.lock().push(state.clone()));

    // Act
    let outcome = controller.connect_by_id("freighter").await.unwrap();

    // Assert
    let ConnectOutcome::Failed(error) = outcome else {
        panic!("expected failure, got {:?}", outcome);
    };
    assert_eq!(error.kind, ConnectionErrorKind::Unknown);
    assert_eq!(storage.inner.dump(), before_entries);
    assert_eq!(store.read(), before_state);
    assert!(observed.lock().is_empty());
    assert_eq!(controller.snapshot().phase, Phase::Select);
}

#[test]
fn failed_clear_leaves_connection_state_unchanged() {
    let storage = QuotaOnKey::existing(KEY_ADDRESS);
    let (store, controller) = setup(AlwaysApprove, storage.clone());
    controller.resume();
    let before_entries = storage.inner.dump();

    assert!(controller.disconnect().is_err());

    assert_eq!(storage.inner.dump(), before_entries);
    assert_eq!(store.read(), ConnectionState::connected("GEXISTING", "Albedo"));
    assert!(controller.snapshot().connected.is_some());
}
