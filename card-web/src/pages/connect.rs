//! Wallet connection page
//!
//! Wallet grid, progress, error and success cards, all rendered from the
//! controller snapshot, plus the help links. Leaving the page cancels an
//! attempt in flight.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lib_core::guard::Route;
use lib_core::view_model::{help_links, show_progress};
use lib_core::ConnectOutcome;
use shared::dto::wallet::WalletOption;

use crate::components::{
    ConnectionProgress, ConnectionSuccess, ErrorMessage, Icon, WalletComparison, WalletOptionCard,
};
use crate::services::wallet::open_in_new_tab;
use crate::state::app::{use_app_context, use_controller_state};

fn report(outcome: ConnectOutcome) {
    match outcome {
        ConnectOutcome::Connected(wallet) => log::info!("Connected to {}", wallet.name),
        ConnectOutcome::Failed(error) => log::warn!("Connection failed: {}", error),
        ConnectOutcome::Unavailable { help_url } => open_in_new_tab(&help_url),
        ConnectOutcome::Cancelled => log::info!("Connection cancelled"),
        ConnectOutcome::InProgress => log::debug!("Connection already in progress"),
    }
}

#[component]
pub fn ConnectPage() -> impl IntoView {
    let ctx = use_app_context();
    ctx.controller.resume();
    let state = use_controller_state();

    let on_cleanup_controller = ctx.controller.clone();
    on_cleanup(move || {
        on_cleanup_controller.cancel();
    });

    let controller = ctx.controller.clone();
    let on_select = Callback::new(move |wallet: WalletOption| {
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            report(controller.connect(&wallet).await);
        });
    });

    let controller = ctx.controller.clone();
    let on_retry = Callback::new(move |_: ()| {
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            match controller.retry().await {
                Some(outcome) => report(outcome),
                None => log::warn!("Nothing to retry"),
            }
        });
    });

    let controller = ctx.controller.clone();
    let on_dismiss = Callback::new(move |_: ()| controller.dismiss_error());

    let controller = ctx.controller.clone();
    let on_disconnect = Callback::new(move |_: ()| {
        if let Err(e) = controller.disconnect() {
            log::error!("Disconnect failed: {}", e);
        }
    });

    let navigate = use_navigate();
    let go_home = move |_| navigate(Route::Landing.path(), Default::default());

    let (show_comparison, set_show_comparison) = signal(false);

    let catalog = StoredValue::new(ctx.controller.catalog().to_vec());
    let help = help_links(&ctx.config)
        .into_iter()
        .map(|link| {
            let url = link.url;
            view! {
                <button class="btn btn-ghost" style="width: 100%; justify-content: flex-start;" on:click=move |_| open_in_new_tab(&url)>
                    <Icon name=link.icon size=14/>
                    " "{link.label}
                </button>
            }
        })
        .collect_view();
    let help_url = ctx.config.help_url.clone();
    let support_email = ctx.config.support_email.clone();

    let phase = Signal::derive(move || state.get().phase);
    let progress_visible = move || {
        let current = state.get();
        show_progress(&current) && current.error.is_none() && current.connected.is_none()
    };
    let disconnected = move || state.get().connected.is_none();

    let grid = move || {
        catalog.with_value(|options| {
            options
                .iter()
                .cloned()
                .map(|option| view! { <WalletOptionCard option=option state=state on_select=on_select/> })
                .collect_view()
        })
    };

    let error = move || {
        state.get().error.map(|error| {
            view! {
                <ErrorMessage
                    error=error
                    on_retry=on_retry
                    on_dismiss=on_dismiss
                    help_url=help_url.clone()
                    support_email=support_email.clone()
                />
            }
        })
    };

    let success = move || {
        state
            .get()
            .connected
            .map(|wallet| view! { <ConnectionSuccess wallet=wallet/> })
    };

    view! {
        <div class="page connect" style="max-width: 1200px; margin: 0 auto; padding: 32px 24px;">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;">
                <button class="btn btn-ghost" on:click=go_home>
                    <Icon name="arrow-left" size=14/>
                    " Back to Home"
                </button>
                <Show
                    when=disconnected
                    fallback=move || view! {
                        <button class="btn btn-ghost" on:click=move |_| on_disconnect.run(())>
                            <Icon name="log-out" size=14/>
                            " Disconnect"
                        </button>
                    }
                >
                    <button class="btn btn-ghost" on:click=move |_| set_show_comparison.update(|shown| *shown = !*shown)>
                        <Icon name="git-compare" size=14/>
                        {move || if show_comparison.get() { " Hide Wallets" } else { " Compare Wallets" }}
                    </button>
                </Show>
            </div>

            <div style="text-align: center; margin-bottom: 32px;">
                <h1>{Route::WalletConnection.title()}</h1>
                <p style="color: var(--text-secondary);">
                    "Choose a Stellar wallet to create cards, deploy contracts and trade on the marketplace."
                </p>
            </div>

            {success}
            {error}

            <Show when=progress_visible fallback=|| ()>
                <ConnectionProgress phase=phase/>
            </Show>

            <Show when=disconnected fallback=|| ()>
                <div class="wallet-grid">{grid}</div>
                <Show when=move || show_comparison.get() fallback=|| ()>
                    <WalletComparison catalog=catalog.get_value()/>
                </Show>
            </Show>

            <div class="card" style="margin-top: 32px;">
                <h3 style="display: flex; align-items: center; gap: 8px;">
                    <Icon name="help-circle" size=20/>
                    "Need Help?"
                </h3>
                <div style="display: flex; flex-direction: column; gap: 8px;">{help}</div>
            </div>
        </div>
    }
}
