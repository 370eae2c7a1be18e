//! Simulated wallet wiring and small browser interop helpers.

use std::sync::Arc;

use lib_core::config::Config;
use lib_core::lifecycle::{RandomFailure, SimulatedWallet};
use wasm_bindgen::prelude::*;

/// Simulated wallet that rejects with the configured probability.
pub fn simulated_wallet(config: &Config) -> SimulatedWallet {
    let outcome = RandomFailure::new(config.failure_rate, js_sys::Math::random);
    SimulatedWallet::from_config(Arc::new(outcome), config)
}

/// Open `url` in a new tab, e.g. the wallet help page.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window, cannot open {}", url);
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("Failed to open {}: {:?}", url, e);
    }
}

#[wasm_bindgen(inline_js = "
export function copyText(text) {
    if (navigator.clipboard && navigator.clipboard.writeText) {
        navigator.clipboard.writeText(text);
        return true;
    }
    return false;
}
")]
extern "C" {
    #[wasm_bindgen(js_name = copyText)]
    fn copy_text(text: &str) -> bool;
}

/// Copy to the clipboard; false when the browser offers no clipboard API.
pub fn copy_to_clipboard(text: &str) -> bool {
    let copied = copy_text(text);
    if !copied {
        log::warn!("Clipboard API unavailable");
    }
    copied
}
