//! Controller and store staying in step.

use super::*;
use shared::dto::wallet::AccountInfo;

#[tokio::test]
async fn test_external_disconnect_clears_summary() {
    let h = harness(AlwaysApprove);
    h.controller.connect(&wallet("freighter")).await;
    assert!(h.controller.snapshot().connected.is_some());

    // Header button writes the store directly
    h.store.disconnect().unwrap();

    let snapshot = h.controller.snapshot();
    assert!(snapshot.connected.is_none());
    assert_eq!(snapshot.phase, Phase::Select);
}

#[test]
fn test_resume_picks_up_persisted_connection() {
    let h = harness(AlwaysApprove);
    h.store.connect("GRESUMEDADDRESS", "Albedo").unwrap();

    let snapshot = h.controller.resume();

    assert_eq!(snapshot.phase, Phase::Complete);
    let summary = snapshot.connected.expect("summary");
    assert_eq!(summary.name, "Albedo");
    assert_eq!(summary.balance, Config::default().mock_balance);
}

#[test]
fn test_resume_when_disconnected() {
    let h = harness(AlwaysApprove);
    assert_eq!(h.controller.resume(), ControllerState::default());
}

#[tokio::test]
async fn test_account_change_rewrites_address() {
    let h = harness(AlwaysApprove);
    let _follow = h.controller.follow_account_changes();
    h.controller.connect(&wallet("freighter")).await;

    h.wallet.simulate_account_change(AccountInfo {
        address: "GSECONDACCOUNT".to_string(),
        balance: "10".to_string(),
    });

    let state = h.store.read();
    assert_eq!(state.address, "GSECONDACCOUNT");
    assert_eq!(state.wallet_name, "Freighter");
    assert_eq!(
        h.controller.snapshot().connected.map(|w| w.address),
        Some("GSECONDACCOUNT".to_string())
    );
}

#[test]
fn test_account_change_ignored_while_disconnected() {
    let h = harness(AlwaysApprove);
    let _follow = h.controller.follow_account_changes();

    h.wallet.simulate_account_change(AccountInfo {
        address: "GSECONDACCOUNT".to_string(),
        balance: "10".to_string(),
    });

    assert!(!h.store.is_connected());
}

#[test]
fn test_controller_drop_unsubscribes_from_store() {
    let h = harness(AlwaysApprove);
    assert_eq!(h.store.subscriber_count(), 1);
    drop(h.controller);
    assert_eq!(h.store.subscriber_count(), 0);
}
