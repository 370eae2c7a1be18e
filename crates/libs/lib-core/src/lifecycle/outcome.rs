//! Approve/reject decision made at the Authorize phase.

use shared::dto::wallet::WalletOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Approve,
    Reject,
}

/// Decides whether the simulated wallet approves a connection prompt.
pub trait OutcomeStrategy: Send + Sync {
    fn decide(&self, wallet: &WalletOption) -> Authorization;
}

impl<F> OutcomeStrategy for F
where
    F: Fn(&WalletOption) -> Authorization + Send + Sync,
{
    fn decide(&self, wallet: &WalletOption) -> Authorization {
        self(wallet)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysApprove;

impl OutcomeStrategy for AlwaysApprove {
    fn decide(&self, _wallet: &WalletOption) -> Authorization {
        Authorization::Approve
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysReject;

impl OutcomeStrategy for AlwaysReject {
    fn decide(&self, _wallet: &WalletOption) -> Authorization {
        Authorization::Reject
    }
}

/// Rejects with probability `rate`, drawing from an injected uniform `[0, 1)` source.
#[derive(Debug, Clone, Copy)]
pub struct RandomFailure {
    rate: f64,
    source: fn() -> f64,
}

impl RandomFailure {
    pub fn new(rate: f64, source: fn() -> f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
            source,
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl OutcomeStrategy for RandomFailure {
    fn decide(&self, _wallet: &WalletOption) -> Authorization {
        if (self.source)() < self.rate {
            Authorization::Reject
        } else {
            Authorization::Approve
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    #[test]
    fn test_random_failure_threshold() {
        let wallet = &default_catalog()[0];
        assert_eq!(RandomFailure::new(0.2, || 0.1).decide(wallet), Authorization::Reject);
        assert_eq!(RandomFailure::new(0.2, || 0.2).decide(wallet), Authorization::Approve);
        assert_eq!(RandomFailure::new(0.0, || 0.0).decide(wallet), Authorization::Approve);
    }

    #[test]
    fn test_rate_is_clamped() {
        assert_eq!(RandomFailure::new(3.0, || 0.5).rate(), 1.0);
    }

    #[test]
    fn test_closure_strategy() {
        let only_albedo = |w: &WalletOption| {
            if w.id == "albedo" {
                Authorization::Approve
            } else {
                Authorization::Reject
            }
        };
        let catalog = default_catalog();
        assert_eq!(only_albedo.decide(&catalog[1]), Authorization::Approve);
        assert_eq!(only_albedo.decide(&catalog[0]), Authorization::Reject);
    }
}
