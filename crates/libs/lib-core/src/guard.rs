//! # View Guards
//!
//! Screens that need a wallet render only while the [`ConnectionStore`] says
//! connected; otherwise the user is sent to the connection screen. Guards
//! re-evaluate on every store broadcast, so a disconnect from any surface
//! redirects every mounted guarded view.

use serde::{Deserialize, Serialize};
use shared::dto::wallet::ConnectionState;
use tracing::debug;

use crate::broadcast::Subscription;
use crate::store::ConnectionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Renders the card creation screen
    Root,
    Landing,
    TransactionHistory,
    CardCreation,
    Marketplace,
    WalletConnection,
    Dashboard,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Root,
        Route::Landing,
        Route::TransactionHistory,
        Route::CardCreation,
        Route::Marketplace,
        Route::WalletConnection,
        Route::Dashboard,
        Route::NotFound,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Landing => "/hero-landing-page",
            Route::TransactionHistory => "/transaction-history-analytics",
            Route::CardCreation => "/card-creation-management",
            Route::Marketplace => "/marketplace-trading-hub",
            Route::WalletConnection => "/wallet-connection-authentication",
            Route::Dashboard => "/dashboard-smart-contract-hub",
            Route::NotFound => "/404",
        }
    }

    /// Resolve a pathname; anything unknown is [`Route::NotFound`].
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Route::ALL
            .into_iter()
            .filter(|route| *route != Route::NotFound)
            .find(|route| route.path() == trimmed)
            .unwrap_or(Route::NotFound)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Root | Route::CardCreation => "Card Creation & Management",
            Route::Landing => "StellarCard",
            Route::TransactionHistory => "Transaction History & Analytics",
            Route::Marketplace => "Marketplace Trading Hub",
            Route::WalletConnection => "Connect Your Wallet",
            Route::Dashboard => "Dashboard & Smart Contract Hub",
            Route::NotFound => "Page Not Found",
        }
    }

    pub fn requires_connection(&self) -> bool {
        matches!(
            self,
            Route::Root
                | Route::CardCreation
                | Route::Dashboard
                | Route::Marketplace
                | Route::TransactionHistory
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

pub fn evaluate(route: Route, state: &ConnectionState) -> GuardDecision {
    if route.requires_connection() && !state.is_connected() {
        GuardDecision::Redirect(Route::WalletConnection)
    } else {
        GuardDecision::Render
    }
}

/// Keeps one mounted view's guard decision current.
pub struct RouteGuard;

impl RouteGuard {
    /// Evaluate `route` now and after every store change. `on_redirect` runs
    /// each time the decision is a redirect.
    ///
    /// Returns the initial decision and the subscription that keeps watching.
    pub fn watch<F>(store: &ConnectionStore, route: Route, on_redirect: F) -> (GuardDecision, Subscription)
    where
        F: Fn(Route) + Send + Sync + 'static,
    {
        let initial = evaluate(route, &store.read());
        if let GuardDecision::Redirect(target) = initial {
            debug!(from = route.path(), to = target.path(), "guard redirect on mount");
            on_redirect(target);
        }

        let subscription = store.subscribe(move |state| {
            if let GuardDecision::Redirect(target) = evaluate(route, state) {
                debug!(from = route.path(), to = target.path(), "guard redirect on change");
                on_redirect(target);
            }
        });
        (initial, subscription)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub icon: &'static str,
}

/// Header navigation: public items while disconnected, the app screens once
/// a wallet is connected.
pub fn nav_items(connected: bool) -> Vec<NavItem> {
    if connected {
        vec![
            NavItem { label: "Dashboard", route: Route::Dashboard, icon: "layout-dashboard" },
            NavItem { label: "Cards", route: Route::CardCreation, icon: "credit-card" },
            NavItem { label: "Marketplace", route: Route::Marketplace, icon: "store" },
            NavItem { label: "History", route: Route::TransactionHistory, icon: "history" },
        ]
    } else {
        vec![NavItem { label: "Home", route: Route::Landing, icon: "home" }]
    }
}
