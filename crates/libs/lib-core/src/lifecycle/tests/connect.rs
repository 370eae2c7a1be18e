//! Connect, fail and retry paths.

use super::*;
use crate::error::{ConnectionErrorKind, CoreError};
use crate::storage::{KeyValueStorage, KEY_ADDRESS, KEY_CONNECTED};

#[tokio::test]
async fn test_success_walks_every_phase() {
    // Arrange
    let h = harness(AlwaysApprove);
    let (phases, _sub) = record_phases(&h.controller);

    // Act
    let outcome = h.controller.connect(&wallet("freighter")).await;

    // Assert
    let ConnectOutcome::Connected(summary) = outcome else {
        panic!("expected a connection, got {:?}", outcome);
    };
    assert_eq!(summary.name, "Freighter");
    assert_eq!(
        *phases.lock(),
        vec![Phase::Select, Phase::Authorize, Phase::Verify, Phase::Complete]
    );

    let state = h.store.read();
    assert!(state.connected);
    assert_eq!(state.wallet_name, "Freighter");
    assert!(!state.address.is_empty());

    let snapshot = h.controller.snapshot();
    assert!(!snapshot.connecting);
    assert_eq!(snapshot.connected, Some(summary));
}

#[tokio::test]
async fn test_rejection_leaves_store_untouched() {
    // Arrange
    let h = harness(AlwaysReject);
    let before = h.storage.dump();
    let (phases, _sub) = record_phases(&h.controller);

    // Act
    let outcome = h.controller.connect(&wallet("albedo")).await;

    // Assert
    assert!(matches!(
        outcome,
        ConnectOutcome::Failed(ref e) if e.kind == ConnectionErrorKind::Permission
    ));
    assert_eq!(h.storage.dump(), before);
    assert_eq!(*phases.lock(), vec![Phase::Select, Phase::Authorize, Phase::Select]);

    let snapshot = h.controller.snapshot();
    assert_eq!(snapshot.phase, Phase::Select);
    assert!(!snapshot.connecting);
    assert_eq!(snapshot.error.map(|e| e.kind), Some(ConnectionErrorKind::Permission));
}

#[tokio::test]
async fn test_unavailable_wallet_does_nothing() {
    let h = harness(AlwaysApprove);
    let (phases, _sub) = record_phases(&h.controller);

    let outcome = h.controller.connect(&wallet("lobstr")).await;

    assert_eq!(
        outcome,
        ConnectOutcome::Unavailable {
            help_url: "https://stellar.org/wallets".to_string()
        }
    );
    assert!(h.storage.dump().is_empty());
    assert_eq!(*phases.lock(), vec![Phase::Select]);
    assert_eq!(h.controller.snapshot(), ControllerState::default());
}

#[tokio::test]
async fn test_connect_by_unknown_id() {
    let h = harness(AlwaysApprove);
    let result = h.controller.connect_by_id("metamask").await;
    assert!(matches!(result, Err(CoreError::UnknownWallet(id)) if id == "metamask"));
}

#[tokio::test]
async fn test_retry_reuses_last_wallet() {
    // Arrange: reject the first prompt, approve the second
    let prompts = Arc::new(AtomicUsize::new(0));
    let counter = prompts.clone();
    let h = harness(move |_: &WalletOption| {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Authorization::Reject
        } else {
            Authorization::Approve
        }
    });

    // Act
    let first = h.controller.connect(&wallet("walletconnect")).await;
    let second = h.controller.retry().await;

    // Assert
    assert!(matches!(first, ConnectOutcome::Failed(_)));
    assert!(matches!(second, Some(ConnectOutcome::Connected(ref w)) if w.name == "WalletConnect"));
    assert_eq!(prompts.load(Ordering::SeqCst), 2);
    assert!(h.controller.snapshot().error.is_none());
}

#[tokio::test]
async fn test_retry_without_choice_is_none() {
    let h = harness(AlwaysApprove);
    assert!(h.controller.retry().await.is_none());
}

#[tokio::test]
async fn test_dismiss_error() {
    let h = harness(AlwaysReject);
    h.controller.connect(&wallet("freighter")).await;
    assert!(h.controller.snapshot().error.is_some());

    h.controller.dismiss_error();

    let snapshot = h.controller.snapshot();
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.phase, Phase::Select);
}

#[tokio::test]
async fn test_storage_failure_is_reported() {
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> crate::error::Result<Option<String>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> crate::error::Result<()> {
            Err(CoreError::Storage("quota exceeded".to_string()))
        }
        fn remove(&self, _key: &str) -> crate::error::Result<()> {
            Ok(())
        }
    }

    let config = Config::default();
    let controller = LifecycleController::new(
        ConnectionStore::new(Arc::new(ReadOnlyStorage)),
        Arc::new(SimulatedWallet::from_config(Arc::new(AlwaysApprove), &config)),
        Arc::new(ImmediateSleeper),
        default_catalog(),
        config,
    );

    let outcome = controller.connect(&wallet("freighter")).await;

    assert!(matches!(outcome, ConnectOutcome::Failed(ref e) if e.kind == ConnectionErrorKind::Unknown));
    assert_eq!(controller.snapshot().phase, Phase::Select);
    assert!(controller.snapshot().connected.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_phase_delays_follow_config() {
    let h = harness_with(AlwaysApprove, TokioSleeper);
    let started = tokio::time::Instant::now();

    h.controller.connect(&wallet("freighter")).await;

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(800 + 2000 + 1500));
    assert!(elapsed < Duration::from_millis(4400));
}

#[tokio::test]
async fn test_second_connect_is_rejected_while_in_flight() {
    let h = harness_with(AlwaysApprove, GateSleeper::new(0));
    let attempt_wallet = wallet("freighter");
    let mut attempt = Box::pin(h.controller.connect(&attempt_wallet));
    assert!(futures::poll!(attempt.as_mut()).is_pending());

    let second = h.controller.connect(&wallet("albedo")).await;

    assert_eq!(second, ConnectOutcome::InProgress);
    assert_eq!(h.controller.snapshot().wallet_id.as_deref(), Some("freighter"));
    assert!(h.storage.get(KEY_CONNECTED).unwrap().is_none());
    assert!(h.storage.get(KEY_ADDRESS).unwrap().is_none());
}
