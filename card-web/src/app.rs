//! StellarCard Web App - Leptos Frontend
//!
//! Router, header and the cross-tab storage listener.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use lib_core::guard::Route as AppRoute;

use crate::components::Header;
use crate::pages::{
    CardsPage, ConnectPage, DashboardPage, HistoryPage, LandingPage, MarketplacePage,
};
use crate::state::app::provide_app_context;

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_app_context();

    // Another tab wrote localStorage
    let store = ctx.store.clone();
    let listener = window_event_listener(ev::storage, move |_| {
        store.refresh();
    });
    on_cleanup(move || listener.remove());

    view! {
        <Router>
            <div class="app-container">
                <Header/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=|| view! { <CardsPage route=AppRoute::Root/> }/>
                        <Route path=path!("/hero-landing-page") view=LandingPage/>
                        <Route path=path!("/transaction-history-analytics") view=HistoryPage/>
                        <Route
                            path=path!("/card-creation-management")
                            view=|| view! { <CardsPage route=AppRoute::CardCreation/> }
                        />
                        <Route path=path!("/marketplace-trading-hub") view=MarketplacePage/>
                        <Route path=path!("/wallet-connection-authentication") view=ConnectPage/>
                        <Route path=path!("/dashboard-smart-contract-hub") view=DashboardPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: var(--text-secondary); margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href=AppRoute::Landing.path()>
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
