//! # Connection Lifecycle
//!
//! One connection attempt walks a fixed sequence of phases:
//!
//! ```text
//! Select ──▶ Authorize ──┬──▶ Verify ──▶ Complete   (store written)
//!                        └──▶ Select + error         (store untouched)
//! ```
//!
//! The seams are traits so tests can drive both branches deterministically:
//!
//! - [`Sleeper`] - the fixed delays between phases
//! - [`OutcomeStrategy`] - approve or reject at Authorize
//! - [`WalletCapability`] - the wallet itself; [`SimulatedWallet`] is the only
//!   implementation today
//!
//! [`LifecycleController`] ties them to a [`ConnectionStore`](crate::store::ConnectionStore).

mod controller;
mod outcome;
mod timer;
mod wallet;

pub use controller::{ConnectOutcome, ControllerState, LifecycleController};
pub use outcome::{AlwaysApprove, AlwaysReject, Authorization, OutcomeStrategy, RandomFailure};
pub use timer::{ImmediateSleeper, Sleeper};
pub use wallet::{AccountChangeCallback, SimulatedWallet, WalletCapability};

use serde::{Deserialize, Serialize};

/// Position in the connection sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Select,
    Authorize,
    Verify,
    Complete,
}

/// Display copy for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifecycleStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub action: Option<&'static str>,
}

const STEPS: [LifecycleStep; 4] = [
    LifecycleStep {
        id: "select",
        title: "Select Wallet",
        description: "Choose your preferred Stellar wallet",
        action: Some("Click on a wallet option above"),
    },
    LifecycleStep {
        id: "authorize",
        title: "Authorize Connection",
        description: "Approve the connection request in your wallet",
        action: Some("Check your wallet for a connection prompt"),
    },
    LifecycleStep {
        id: "verify",
        title: "Verify Account",
        description: "Confirm your account details and network",
        action: Some("Verifying account information..."),
    },
    LifecycleStep {
        id: "complete",
        title: "Connection Complete",
        description: "Your wallet is now connected to StellarCard",
        action: Some("Ready to use the platform"),
    },
];

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Select, Phase::Authorize, Phase::Verify, Phase::Complete];

    /// Zero-based position, as shown by the progress indicator.
    pub fn index(&self) -> usize {
        match self {
            Phase::Select => 0,
            Phase::Authorize => 1,
            Phase::Verify => 2,
            Phase::Complete => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Phase> {
        Phase::ALL.get(index).copied()
    }

    pub fn step(&self) -> &'static LifecycleStep {
        &STEPS[self.index()]
    }

    pub fn next(&self) -> Option<Phase> {
        Phase::from_index(self.index() + 1)
    }
}

#[cfg(test)]
mod tests;
