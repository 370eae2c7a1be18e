//! # Lifecycle Tests
//!
//! Controller tests share one harness: in-memory storage, a simulated wallet
//! with a forced outcome and a sleeper chosen per test.

mod connect;
mod sync;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::*;
use crate::broadcast::Subscription;
use crate::catalog::{default_catalog, find};
use crate::config::Config;
use crate::storage::MemoryStorage;
use crate::store::ConnectionStore;
use shared::dto::wallet::WalletOption;

pub struct Harness {
    pub storage: Arc<MemoryStorage>,
    pub store: ConnectionStore,
    pub wallet: Arc<SimulatedWallet>,
    pub controller: LifecycleController,
}

pub fn harness_with<O, S>(outcome: O, sleeper: S) -> Harness
where
    O: OutcomeStrategy + 'static,
    S: Sleeper + 'static,
{
    let config = Config::default();
    let storage = Arc::new(MemoryStorage::new());
    let store = ConnectionStore::new(storage.clone());
    let wallet = Arc::new(SimulatedWallet::from_config(Arc::new(outcome), &config));
    let controller = LifecycleController::new(
        store.clone(),
        wallet.clone(),
        Arc::new(sleeper),
        default_catalog(),
        config,
    );
    Harness {
        storage,
        store,
        wallet,
        controller,
    }
}

pub fn harness<O: OutcomeStrategy + 'static>(outcome: O) -> Harness {
    harness_with(outcome, ImmediateSleeper)
}

pub fn wallet(id: &str) -> WalletOption {
    find(&default_catalog(), id).cloned().expect("wallet in catalog")
}

/// Distinct phases in the order the controller broadcast them.
pub fn record_phases(controller: &LifecycleController) -> (Arc<Mutex<Vec<Phase>>>, Subscription) {
    let seen = Arc::new(Mutex::new(vec![controller.snapshot().phase]));
    let sink = seen.clone();
    let subscription = controller.subscribe(move |state| {
        let mut seen = sink.lock();
        if seen.last() != Some(&state.phase) {
            seen.push(state.phase);
        }
    });
    (seen, subscription)
}

/// Lets the first `open` sleeps through, then never wakes.
pub struct GateSleeper {
    calls: AtomicUsize,
    open: usize,
}

impl GateSleeper {
    pub fn new(open: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            open,
        }
    }
}

#[async_trait(?Send)]
impl Sleeper for GateSleeper {
    async fn sleep(&self, _duration: Duration) {
        if self.calls.fetch_add(1, Ordering::SeqCst) >= self.open {
            futures::future::pending::<()>().await;
        }
    }
}

/// Real timer, for paused-clock tests.
pub struct TokioSleeper;

#[async_trait(?Send)]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[test]
fn test_phase_order() {
    let indices: Vec<usize> = Phase::ALL.iter().map(Phase::index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert!(Phase::Select < Phase::Complete);
}

#[test]
fn test_next_stops_at_complete() {
    assert_eq!(Phase::Verify.next(), Some(Phase::Complete));
    assert_eq!(Phase::Complete.next(), None);
}

#[test]
fn test_step_copy() {
    assert_eq!(Phase::Authorize.step().title, "Authorize Connection");
    assert_eq!(Phase::Select.step().id, "select");
}
