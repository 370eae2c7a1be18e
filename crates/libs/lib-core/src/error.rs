//! # Centralized Error Handling
//!
//! Two kinds of failure live here and they are deliberately separate:
//!
//! 1. [`CoreError`] - infrastructure failures (storage backend, configuration,
//!    unknown catalog ids) and rejected form input. Returned through [`Result`] and propagated with `?`.
//! 2. [`ConnectionError`] - the outcome of a failed connection attempt. This is a
//!    *value* exposed by the lifecycle controller for the error panel; it is never
//!    raised as a `CoreError` and never crosses a component boundary as a panic.
//!
//! ## Connection Error Taxonomy
//!
//! | Kind | Produced by |
//! |---|---|
//! | [`Permission`](ConnectionErrorKind::Permission) | Simulated wallet (user rejected the prompt) |
//! | [`Connection`](ConnectionErrorKind::Connection) | Real wallet integrations only |
//! | [`Network`](ConnectionErrorKind::Network) | Real wallet integrations only |
//! | [`Timeout`](ConnectionErrorKind::Timeout) | Real wallet integrations only |
//! | [`Unknown`](ConnectionErrorKind::Unknown) | Fallback for unclassified failures |
//!
//! The controller itself never synthesizes a kind; it only forwards what the
//! [`WalletCapability`](crate::lifecycle::WalletCapability) returned.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{CoreError, Result};
//!
//! fn rate(raw: &str) -> Result<f64> {
//!     raw.parse()
//!         .map_err(|e| CoreError::Config(format!("failure rate: {}", e)))
//! }
//! assert!(rate("0.2").is_ok());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience type alias for `Result<T, CoreError>`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Infrastructure error type for the connection core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The key/value backend rejected a write or removal.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A write that would break the connection state invariant.
    #[error("Invalid connection state: {0}")]
    InvalidState(String),

    /// A wallet id that is not in the catalog.
    #[error("Unknown wallet: {0}")]
    UnknownWallet(String),

    /// User input rejected by a card, contract or purchase form.
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON encoding or decoding failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

/// Category of a failed connection attempt, as surfaced to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionErrorKind {
    Connection,
    Permission,
    Network,
    Timeout,
    #[default]
    Unknown,
}

impl ConnectionErrorKind {
    /// Whether the simulated connection flow can produce this kind.
    ///
    /// Everything except `Permission` is reachable only through a real wallet
    /// integration behind [`WalletCapability`](crate::lifecycle::WalletCapability).
    pub fn produced_by_simulation(&self) -> bool {
        matches!(self, ConnectionErrorKind::Permission)
    }
}

/// A failed connection attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind:?}: {message}")]
pub struct ConnectionError {
    pub kind: ConnectionErrorKind,
    pub message: String,
}

impl ConnectionError {
    pub fn new(kind: ConnectionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The user declined the wallet's connection prompt.
    pub fn rejected() -> Self {
        Self::new(
            ConnectionErrorKind::Permission,
            "User rejected the connection request",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_is_permission() {
        let err = ConnectionError::rejected();
        assert_eq!(err.kind, ConnectionErrorKind::Permission);
        assert_eq!(err.message, "User rejected the connection request");
    }

    #[test]
    fn test_only_permission_is_simulated() {
        let simulated: Vec<_> = [
            ConnectionErrorKind::Connection,
            ConnectionErrorKind::Permission,
            ConnectionErrorKind::Network,
            ConnectionErrorKind::Timeout,
            ConnectionErrorKind::Unknown,
        ]
        .into_iter()
        .filter(|k| k.produced_by_simulation())
        .collect();
        assert_eq!(simulated, vec![ConnectionErrorKind::Permission]);
    }

    #[test]
    fn test_core_error_display() {
        let err = CoreError::UnknownWallet("metamask".to_string());
        assert_eq!(err.to_string(), "Unknown wallet: metamask");
    }
}
