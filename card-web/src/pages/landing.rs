//! Public landing page

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::guard::Route;

use crate::components::Icon;
use crate::state::app::use_connection_state;
use crate::utils::constants::{BRAND_NAME, POST_CONNECT_PATH};

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "credit-card",
        "Programmable Cards",
        "Design cards backed by Soroban contracts with spending limits and multisig.",
    ),
    (
        "zap",
        "Instant Settlement",
        "Payments settle on Stellar in seconds with fees measured in fractions of a cent.",
    ),
    (
        "store",
        "Open Marketplace",
        "List card templates and trade them with other holders.",
    ),
    (
        "bar-chart-3",
        "Full History",
        "Filter, search and export every transaction your cards make.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let state = use_connection_state();

    let cta = move || {
        if state.get().connected {
            view! {
                <A href=POST_CONNECT_PATH>
                    <span class="btn btn-large">"Go to Dashboard"</span>
                </A>
            }
            .into_any()
        } else {
            view! {
                <A href=Route::WalletConnection.path()>
                    <span class="btn btn-large">"Connect Wallet"</span>
                </A>
            }
            .into_any()
        }
    };

    let features = FEATURES
        .iter()
        .map(|&(icon, title, body)| {
            view! {
                <div class="card feature-card">
                    <Icon name=icon size=28/>
                    <h3>{title}</h3>
                    <p style="color: var(--text-secondary);">{body}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page landing">
            <section class="hero" style="text-align: center; padding: 96px 24px;">
                <h1 style="font-size: 48px; margin-bottom: 16px;">
                    {BRAND_NAME}
                </h1>
                <p style="color: var(--text-secondary); font-size: 20px; max-width: 640px; margin: 0 auto 32px;">
                    "Smart-contract payment cards on the Stellar network."
                </p>
                {cta}
            </section>
            <section class="feature-grid">{features}</section>
        </div>
    }
}
