//! Wallet catalog and connection state types

use serde::{Deserialize, Serialize};

/// Persisted record of whether a wallet is connected and its display identity.
///
/// `address` and `wallet_name` are non-empty if and only if `connected` is true.
/// Build values through [`ConnectionState::connected`] and
/// [`ConnectionState::disconnected`] to keep that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionState {
    pub connected: bool,
    pub address: String,
    pub wallet_name: String,
}

impl ConnectionState {
    /// The empty, not-connected form.
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: impl Into<String>, wallet_name: impl Into<String>) -> Self {
        Self {
            connected: true,
            address: address.into(),
            wallet_name: wallet_name.into(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Address if connected
    pub fn address(&self) -> Option<&str> {
        if self.connected {
            Some(&self.address)
        } else {
            None
        }
    }
}

/// Whether a catalog wallet can be connected from this page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletAvailability {
    Available,
    Unavailable,
}

/// Fixed 1-5 ratings shown in the wallet comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRatings {
    pub security: u8,
    pub ease: u8,
    pub features: u8,
    pub mobile: u8,
    pub hardware: u8,
}

/// One entry of the static wallet catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletOption {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub status: WalletAvailability,
    pub recommended: bool,
    pub ratings: WalletRatings,
}

impl WalletOption {
    pub fn is_available(&self) -> bool {
        self.status == WalletAvailability::Available
    }
}

/// Account identity returned by a wallet after it approves a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub address: String,
    pub balance: String,
}

/// Network health as shown next to the wallet address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStatus {
    #[default]
    Connected,
    Slow,
    Disconnected,
}

impl NetworkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NetworkStatus::Connected => "Connected",
            NetworkStatus::Slow => "Slow Network",
            NetworkStatus::Disconnected => "Disconnected",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, NetworkStatus::Connected)
    }
}

/// Summary of a successful connection, exposed by the lifecycle controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedWallet {
    pub name: String,
    pub address: String,
    pub balance: String,
    pub network_status: NetworkStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_is_empty() {
        let state = ConnectionState::disconnected();
        assert!(!state.connected);
        assert!(state.address.is_empty());
        assert!(state.wallet_name.is_empty());
        assert_eq!(state.address(), None);
    }

    #[test]
    fn test_connected_state_json_shape() {
        let state = ConnectionState::connected("GABC", "Freighter");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["connected"], true);
        assert_eq!(json["wallet_name"], "Freighter");
    }

    #[test]
    fn test_availability_serializes_lowercase() {
        let json = serde_json::to_string(&WalletAvailability::Unavailable).unwrap();
        assert_eq!(json, "\"unavailable\"");
    }
}
