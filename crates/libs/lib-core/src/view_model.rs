//! Display models for the connection screens.
//!
//! Everything here is a pure function of controller or store state, so the web
//! components stay thin and the copy is testable without a browser.

use serde::Serialize;
use shared::dto::wallet::{ConnectedWallet, ConnectionState, WalletOption, WalletRatings};
use shared::utils::{format_address, format_balance};

use crate::config::Config;
use crate::error::{ConnectionError, ConnectionErrorKind};
use crate::lifecycle::{ControllerState, LifecycleStep, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    pub step: LifecycleStep,
    pub status: StepStatus,
    /// Only the active step carries its action hint
    pub action: Option<&'static str>,
    /// Connector line below this step, absent after the last one
    pub connector_done: Option<bool>,
}

pub fn progress_indicators(phase: Phase) -> Vec<StepIndicator> {
    let current = phase.index();
    Phase::ALL
        .iter()
        .map(|p| {
            let step = *p.step();
            let status = match p.index() {
                i if i < current => StepStatus::Completed,
                i if i == current => StepStatus::Active,
                _ => StepStatus::Pending,
            };
            StepIndicator {
                step,
                status,
                action: if status == StepStatus::Active { step.action } else { None },
                connector_done: (p.index() + 1 < Phase::ALL.len()).then_some(status == StepStatus::Completed),
            }
        })
        .collect()
}

/// The progress card is shown while an attempt runs or once it moved past Select.
pub fn show_progress(state: &ControllerState) -> bool {
    state.connecting || state.phase > Phase::Select
}

const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred while connecting to your wallet.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPanel {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: String,
    pub troubleshooting: [&'static str; 3],
}

impl ErrorPanel {
    pub fn for_error(error: &ConnectionError) -> Self {
        let (icon, title, troubleshooting) = match error.kind {
            ConnectionErrorKind::Connection => (
                "wifi-off",
                "Connection Failed",
                [
                    "Check if your wallet extension is installed and enabled",
                    "Refresh the page and try again",
                    "Make sure your wallet is unlocked",
                ],
            ),
            ConnectionErrorKind::Permission => (
                "shield-alert",
                "Permission Denied",
                [
                    "Click \"Connect\" when prompted by your wallet",
                    "Make sure you approve the connection request",
                    "Check if the website is trusted in your wallet settings",
                ],
            ),
            ConnectionErrorKind::Network => (
                "alert-triangle",
                "Network Error",
                [
                    "Check your internet connection",
                    "Try switching to a different network",
                    "Wait a moment and retry the connection",
                ],
            ),
            ConnectionErrorKind::Timeout => (
                "clock",
                "Connection Timeout",
                [
                    "The connection request timed out",
                    "Make sure your wallet is responsive",
                    "Try connecting again with a faster response",
                ],
            ),
            ConnectionErrorKind::Unknown => (
                "alert-circle",
                "Connection Error",
                [
                    "Refresh the page and try again",
                    "Make sure your wallet is installed and unlocked",
                    "Contact support if the problem persists",
                ],
            ),
        };

        let message = if error.message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            error.message.clone()
        };

        Self {
            icon,
            title,
            message,
            troubleshooting,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessPanel {
    pub wallet_name: String,
    pub full_address: String,
    pub short_address: String,
    /// Formatted balance with unit, e.g. `1,247.5634 XLM`
    pub balance: String,
    pub network_label: &'static str,
    pub network_healthy: bool,
}

impl SuccessPanel {
    pub fn from_wallet(wallet: &ConnectedWallet) -> Self {
        Self {
            wallet_name: wallet.name.clone(),
            full_address: wallet.address.clone(),
            short_address: format_address(&wallet.address, 8, 8),
            balance: format!("{} XLM", format_balance(&wallet.balance)),
            network_label: wallet.network_status.label(),
            network_healthy: wallet.network_status.is_healthy(),
        }
    }
}

/// Header badge for the connected wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletStatusBadge {
    pub wallet_name: String,
    pub short_address: String,
}

impl WalletStatusBadge {
    pub fn from_state(state: &ConnectionState) -> Option<Self> {
        let address = state.address()?;
        Some(Self {
            wallet_name: state.wallet_name.clone(),
            short_address: format_address(address, 6, 4),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub icon: &'static str,
    /// One rating per compared wallet, in catalog order
    pub ratings: Vec<u8>,
}

const COMPARED_WALLETS: usize = 3;

/// Wallets shown as columns of the comparison table.
pub fn compared_wallets(catalog: &[WalletOption]) -> &[WalletOption] {
    &catalog[..catalog.len().min(COMPARED_WALLETS)]
}

pub fn comparison_rows(catalog: &[WalletOption]) -> Vec<ComparisonRow> {
    let features: [(&'static str, &'static str, fn(&WalletRatings) -> u8); 5] = [
        ("Security Level", "shield", |r| r.security),
        ("Ease of Use", "smile", |r| r.ease),
        ("Features", "star", |r| r.features),
        ("Mobile Support", "smartphone", |r| r.mobile),
        ("Hardware Support", "hard-drive", |r| r.hardware),
    ];

    let wallets = compared_wallets(catalog);
    features
        .iter()
        .map(|(label, icon, pick)| ComparisonRow {
            label,
            icon,
            ratings: wallets.iter().map(|w| pick(&w.ratings).min(5)).collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletOptionView {
    pub status_label: &'static str,
    pub button_label: &'static str,
    pub disabled: bool,
    /// This option is the one being connected
    pub busy: bool,
}

pub fn wallet_option_view(option: &WalletOption, state: &ControllerState) -> WalletOptionView {
    let busy = state.connecting && state.wallet_id.as_deref() == Some(option.id.as_str());
    let (status_label, button_label) = if !option.is_available() {
        ("Not Installed", "Install Wallet")
    } else if busy {
        ("Available", "Connecting...")
    } else {
        ("Available", "Connect Wallet")
    };

    WalletOptionView {
        status_label,
        button_label,
        disabled: state.connecting,
        busy,
    }
}

/// Entry in the "Need Help?" box on the connect page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub url: String,
}

pub fn help_links(config: &Config) -> Vec<HelpLink> {
    vec![
        HelpLink {
            label: "Wallet Setup Guide",
            icon: "external-link",
            url: config.help_url.clone(),
        },
        HelpLink {
            label: "Stellar Documentation",
            icon: "book",
            url: config.docs_url.clone(),
        },
        HelpLink {
            label: "Contact Support",
            icon: "mail",
            url: format!("mailto:{}", config.support_email),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use shared::dto::wallet::NetworkStatus;

    #[test]
    fn test_progress_statuses() {
        let indicators = progress_indicators(Phase::Verify);
        let statuses: Vec<_> = indicators.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![StepStatus::Completed, StepStatus::Completed, StepStatus::Active, StepStatus::Pending]
        );
        assert!(indicators[2].action.is_some());
        assert!(indicators[0].action.is_none());
        assert_eq!(indicators[3].connector_done, None);
        assert_eq!(indicators[1].connector_done, Some(true));
    }

    #[test]
    fn test_show_progress() {
        let mut state = ControllerState::default();
        assert!(!show_progress(&state));
        state.connecting = true;
        assert!(show_progress(&state));
    }

    #[test]
    fn test_error_panel_copy() {
        let panel = ErrorPanel::for_error(&ConnectionError::rejected());
        assert_eq!(panel.title, "Permission Denied");
        assert_eq!(panel.message, "User rejected the connection request");

        let blank = ErrorPanel::for_error(&ConnectionError::new(ConnectionErrorKind::Timeout, ""));
        assert_eq!(blank.title, "Connection Timeout");
        assert_eq!(blank.message, DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_success_panel() {
        let panel = SuccessPanel::from_wallet(&ConnectedWallet {
            name: "Freighter".to_string(),
            address: "GCKFBEIYTKP74Q7SMPFIIHFGPHAU6GIIKO2FBFM2BEWEVHQG4OBAAHZPF".to_string(),
            balance: "1,247.5634".to_string(),
            network_status: NetworkStatus::Connected,
        });
        assert_eq!(panel.short_address, "GCKFBEIY...OBAAHZPF");
        assert_eq!(panel.balance, "1,247.5634 XLM");
        assert!(panel.network_healthy);
    }

    #[test]
    fn test_badge_only_when_connected() {
        assert!(WalletStatusBadge::from_state(&ConnectionState::disconnected()).is_none());
        let badge = WalletStatusBadge::from_state(&ConnectionState::connected(
            "GCKFBEIYTKP74Q7SMPFIIHFGPHAU6GIIKO2FBFM2BEWEVHQG4OBAAHZPF",
            "Albedo",
        ))
        .unwrap();
        assert_eq!(badge.short_address, "GCKFBE...HZPF");
    }

    #[test]
    fn test_comparison_covers_three_wallets() {
        let rows = comparison_rows(&default_catalog());
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.ratings.len() == 3));
        assert_eq!(rows[0].ratings, vec![5, 4, 4]);
    }

    #[test]
    fn test_wallet_option_view() {
        let catalog = default_catalog();
        let mut state = ControllerState::default();
        assert_eq!(wallet_option_view(&catalog[3], &state).button_label, "Install Wallet");

        state.connecting = true;
        state.wallet_id = Some("freighter".to_string());
        let busy = wallet_option_view(&catalog[0], &state);
        assert!(busy.busy && busy.disabled);
        assert_eq!(busy.button_label, "Connecting...");
        assert!(!wallet_option_view(&catalog[1], &state).busy);
    }

    #[test]
    fn test_help_links_follow_config() {
        // Arrange
        let config = Config {
            docs_url: "https://docs.example.org".to_string(),
            support_email: "help@example.org".to_string(),
            ..Config::default()
        };

        // Act
        let links = help_links(&config);

        // Assert
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://stellar.org/wallets", "https://docs.example.org", "mailto:help@example.org"]
        );
        assert_eq!(links[1].label, "Stellar Documentation");
    }
}
