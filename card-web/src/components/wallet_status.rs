//! Header badge with the connected wallet and network

use leptos::prelude::*;
use lib_core::view_model::WalletStatusBadge;

use crate::state::app::use_connection_state;
use crate::utils::constants::NETWORK_NAME;

/// Renders nothing while disconnected.
#[component]
pub fn WalletStatusIndicator() -> impl IntoView {
    let state = use_connection_state();

    move || {
        WalletStatusBadge::from_state(&state.get()).map(|badge| {
            view! {
                <div class="wallet-status" title=badge.wallet_name.clone()>
                    <span class="status-dot status-dot-ok"></span>
                    <span style="color: var(--text-secondary); font-size: 0.85em;">{NETWORK_NAME}</span>
                    <span style="font-family: monospace; color: var(--text-primary);">{badge.short_address}</span>
                </div>
            }
        })
    }
}
