//! Route guard wrapper for screens that need a connected wallet

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use lib_core::guard::{evaluate, GuardDecision, Route, RouteGuard};

use crate::state::app::{use_app_context, use_connection_state};

/// Renders `children` only while `route` may be shown; otherwise navigates to
/// the redirect target, on mount and whenever the connection drops.
#[component]
pub fn RequireWallet(route: Route, children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let state = use_connection_state();
    let navigate = use_navigate();
    let (redirect, set_redirect) = signal(None::<Route>);

    let (_, subscription) = RouteGuard::watch(&ctx.store, route, move |target| {
        set_redirect.set(Some(target));
    });
    on_cleanup(move || drop(subscription));

    Effect::new(move || {
        if let Some(target) = redirect.get() {
            log::info!("{} requires a wallet, redirecting to {}", route.path(), target.path());
            navigate(
                target.path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let allowed = move || evaluate(route, &state.get()) == GuardDecision::Render;

    view! {
        <Show when=allowed fallback=|| ()>
            {children()}
        </Show>
    }
}
