//! Confirmation card after a wallet connects

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lib_core::guard::Route;
use lib_core::view_model::SuccessPanel;
use shared::dto::wallet::ConnectedWallet;

use super::Icon;
use crate::services::wallet::copy_to_clipboard;
use crate::utils::constants::{BRAND_NAME, COPY_FEEDBACK_MS, POST_CONNECT_PATH};

#[component]
pub fn ConnectionSuccess(wallet: ConnectedWallet) -> impl IntoView {
    let panel = SuccessPanel::from_wallet(&wallet);
    let navigate = use_navigate();
    let (copied, set_copied) = signal(false);

    let full_address = panel.full_address.clone();
    let on_copy = move |_| {
        if copy_to_clipboard(&full_address) {
            set_copied.set(true);
            Timeout::new(COPY_FEEDBACK_MS, move || set_copied.set(false)).forget();
        }
    };

    let go_home = {
        let navigate = navigate.clone();
        move |_| navigate(Route::Landing.path(), Default::default())
    };
    let go_dashboard = move |_| navigate(POST_CONNECT_PATH, Default::default());

    view! {
        <div class="card success-card">
            <div style="text-align: center; margin-bottom: var(--spacing-lg);">
                <Icon name="check-circle" size=48/>
                <h2 class="card-title">"Wallet Connected Successfully!"</h2>
                <p style="color: var(--text-secondary);">
                    "Your " {panel.wallet_name.clone()} " wallet is now connected to " {BRAND_NAME}
                </p>
            </div>

            <div style="background: var(--bg-card); padding: var(--spacing-lg); border-radius: var(--border-radius); border: 1px solid var(--border-color); margin-bottom: var(--spacing-lg);">
                <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Wallet Address"</p>
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: var(--spacing-md);">
                    <span style="font-family: monospace;" title=panel.full_address.clone()>{panel.short_address}</span>
                    <button class="btn btn-ghost" on:click=on_copy aria-label="Copy address">
                        {move || view! { <Icon name=if copied.get() { "check" } else { "copy" } size=14/> }}
                    </button>
                </div>

                <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Balance"</p>
                <p style="font-weight: bold; margin-bottom: var(--spacing-md);">{panel.balance}</p>

                <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Network"</p>
                <p style="display: flex; align-items: center; gap: 6px;">
                    <span class="status-dot" class:status-dot-ok=panel.network_healthy></span>
                    {panel.network_label}
                </p>
            </div>

            <div style="display: flex; gap: 8px;">
                <button class="btn btn-ghost" style="flex: 1;" on:click=go_home>"Back to Home"</button>
                <button class="btn" style="flex: 1;" on:click=go_dashboard>
                    "Continue to Dashboard "
                    <Icon name="arrow-right" size=14/>
                </button>
            </div>
        </div>
    }
}
