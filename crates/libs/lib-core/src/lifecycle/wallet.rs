//! Wallet capability seam and the simulated wallet behind it.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::dto::wallet::{AccountInfo, WalletOption};
use tracing::{debug, info};

use super::outcome::{Authorization, OutcomeStrategy};
use crate::broadcast::{Broadcast, Subscription};
use crate::config::Config;
use crate::error::ConnectionError;

pub type AccountChangeCallback = Box<dyn Fn(&AccountInfo) + Send + Sync>;

/// What the lifecycle needs from a wallet.
#[async_trait(?Send)]
pub trait WalletCapability: Send + Sync {
    /// Prompt the wallet and resolve once the user answered.
    async fn connect(&self, wallet: &WalletOption) -> Result<AccountInfo, ConnectionError>;

    fn disconnect(&self);

    /// Called whenever the wallet switches to another account.
    fn on_account_change(&self, callback: AccountChangeCallback) -> Subscription;
}

/// Placeholder wallet: answers from an [`OutcomeStrategy`] and always hands out
/// the same configured account.
pub struct SimulatedWallet {
    outcome: Arc<dyn OutcomeStrategy>,
    account: Mutex<AccountInfo>,
    account_changes: Broadcast<AccountInfo>,
}

impl SimulatedWallet {
    pub fn new(outcome: Arc<dyn OutcomeStrategy>, account: AccountInfo) -> Self {
        Self {
            outcome,
            account: Mutex::new(account),
            account_changes: Broadcast::new(),
        }
    }

    pub fn from_config(outcome: Arc<dyn OutcomeStrategy>, config: &Config) -> Self {
        Self::new(
            outcome,
            AccountInfo {
                address: config.mock_address.clone(),
                balance: config.mock_balance.clone(),
            },
        )
    }

    pub fn account(&self) -> AccountInfo {
        self.account.lock().clone()
    }

    /// Switch the active account and tell every listener.
    pub fn simulate_account_change(&self, account: AccountInfo) {
        *self.account.lock() = account.clone();
        debug!(address = %account.address, "simulated account switched");
        self.account_changes.emit(&account);
    }
}

#[async_trait(?Send)]
impl WalletCapability for SimulatedWallet {
    async fn connect(&self, wallet: &WalletOption) -> Result<AccountInfo, ConnectionError> {
        match self.outcome.decide(wallet) {
            Authorization::Approve => {
                info!(wallet = %wallet.id, "simulated wallet approved connection");
                Ok(self.account())
            }
            Authorization::Reject => {
                info!(wallet = %wallet.id, "simulated wallet rejected connection");
                Err(ConnectionError::rejected())
            }
        }
    }

    fn disconnect(&self) {
        debug!("simulated wallet disconnected");
    }

    fn on_account_change(&self, callback: AccountChangeCallback) -> Subscription {
        self.account_changes.subscribe(move |account| callback(account))
    }
}

impl std::fmt::Debug for SimulatedWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedWallet")
            .field("account", &*self.account.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::config::DEFAULT_MOCK_ADDRESS;
    use crate::error::ConnectionErrorKind;
    use crate::lifecycle::{AlwaysApprove, AlwaysReject};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_approve_returns_configured_account() {
        let wallet = SimulatedWallet::from_config(Arc::new(AlwaysApprove), &Config::default());
        let account = wallet.connect(&default_catalog()[0]).await.unwrap();
        assert_eq!(account.address, DEFAULT_MOCK_ADDRESS);
    }

    #[tokio::test]
    async fn test_reject_is_permission_error() {
        let wallet = SimulatedWallet::from_config(Arc::new(AlwaysReject), &Config::default());
        let err = wallet.connect(&default_catalog()[0]).await.unwrap_err();
        assert_eq!(err.kind, ConnectionErrorKind::Permission);
    }

    #[test]
    fn test_account_change_listener() {
        let wallet = SimulatedWallet::from_config(Arc::new(AlwaysApprove), &Config::default());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let sub = wallet.on_account_change(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        wallet.simulate_account_change(AccountInfo {
            address: "GNEW".to_string(),
            balance: "0".to_string(),
        });
        drop(sub);
        wallet.simulate_account_change(AccountInfo::default());

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(wallet.account().address, "");
    }
}
