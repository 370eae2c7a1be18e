//! Composition root and context access.
//!
//! One [`ConnectionStore`] and one [`LifecycleController`] exist per page
//! load. Components reach them through Leptos context and never touch
//! `localStorage` directly.

use std::sync::Arc;

use leptos::prelude::*;
use lib_core::catalog::default_catalog;
use lib_core::config::{core_config, Config};
use lib_core::deployment::Deployer;
use lib_core::fixtures::{DemoFixtures, FixtureSource};
use lib_core::{ConnectionStore, ControllerState, LifecycleController};
use shared::dto::wallet::ConnectionState;

use crate::services::wallet::simulated_wallet;
use crate::services::{GlooSleeper, LocalStorage};

#[derive(Clone)]
pub struct AppContext {
    pub store: ConnectionStore,
    pub controller: LifecycleController,
    pub fixtures: Arc<dyn FixtureSource>,
    pub deployer: Deployer,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let store = ConnectionStore::new(Arc::new(LocalStorage));
        let controller = LifecycleController::new(
            store.clone(),
            Arc::new(simulated_wallet(&config)),
            Arc::new(GlooSleeper),
            default_catalog(),
            config.clone(),
        );

        Self {
            store,
            controller,
            fixtures: Arc::new(DemoFixtures),
            deployer: Deployer::new(Arc::new(GlooSleeper), &config),
            config,
        }
    }
}

pub fn provide_app_context() -> AppContext {
    let context = AppContext::new(core_config().clone());
    // Lives as long as the page
    context.controller.follow_account_changes().detach();
    provide_context(context.clone());
    context
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Persisted connection state, kept current while the calling component is mounted.
pub fn use_connection_state() -> ReadSignal<ConnectionState> {
    let store = use_app_context().store;
    let (state, set_state) = signal(store.read());
    let subscription = store.subscribe(move |current| set_state.set(current.clone()));
    on_cleanup(move || drop(subscription));
    state
}

/// Controller snapshot, kept current while the calling component is mounted.
pub fn use_controller_state() -> ReadSignal<ControllerState> {
    let controller = use_app_context().controller;
    let (state, set_state) = signal(controller.snapshot());
    let subscription = controller.subscribe(move |current| set_state.set(current.clone()));
    on_cleanup(move || drop(subscription));
    state
}
