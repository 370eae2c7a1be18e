//! StellarCard web app
//!
//! Browser front end over `lib-core`: local-storage backed connection store,
//! the connection wizard and the gated card screens.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());

    // No process environment in the browser, so this only pins the defaults
    if let Err(e) = lib_core::config::init_config() {
        log::warn!("Using default configuration: {}", e);
    }
    log::info!("StellarCard starting...");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
