//! Header - brand, navigation and the connect/disconnect button

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use lib_core::guard::{nav_items, Route};

use super::{Icon, WalletStatusIndicator};
use crate::state::app::{use_app_context, use_connection_state};
use crate::utils::constants::BRAND_NAME;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_connection_state();
    let location = use_location();
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = signal(false);

    let on_wallet_button = move |_| {
        if state.get_untracked().connected {
            if let Err(e) = ctx.controller.disconnect() {
                log::error!("Disconnect failed: {}", e);
            }
        } else {
            navigate(Route::WalletConnection.path(), Default::default());
        }
        set_menu_open.set(false);
    };

    let links = move || {
        let current = Route::from_path(&location.pathname.get());
        nav_items(state.get().connected)
            .into_iter()
            .map(|item| {
                let class = if item.route == current { "nav-link active" } else { "nav-link" };
                view! {
                    <A href=item.route.path()>
                        <span class=class on:click=move |_| set_menu_open.set(false)>
                            <Icon name=item.icon/>
                            " "{item.label}
                        </span>
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="header">
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href=Route::Landing.path() attr:class="nav-link-clean">
                    <span class="nav-title">{BRAND_NAME}</span>
                </A>

                <div class="nav-links" class:open=move || menu_open.get()>
                    {links}
                </div>

                <div style="display: flex; align-items: center; gap: 12px;">
                    <WalletStatusIndicator/>
                    <button class="btn" on:click=on_wallet_button>
                        {move || if state.get().connected { "Disconnect" } else { "Connect Wallet" }}
                    </button>
                    <button
                        class="btn btn-ghost menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || view! { <Icon name=if menu_open.get() { "x" } else { "menu" }/> }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
