//! UI Components

pub mod connection_progress;
pub mod connection_success;
pub mod error_message;
pub mod guard;
pub mod header;
pub mod wallet_comparison;
pub mod wallet_option;
pub mod wallet_status;

pub use connection_progress::ConnectionProgress;
pub use connection_success::ConnectionSuccess;
pub use error_message::ErrorMessage;
pub use guard::RequireWallet;
pub use header::Header;
pub use wallet_comparison::WalletComparison;
pub use wallet_option::WalletOptionCard;
pub use wallet_status::WalletStatusIndicator;

use leptos::prelude::*;

/// Named icon placeholder; the stylesheet maps `data-icon` to a glyph.
#[component]
pub fn Icon(name: &'static str, #[prop(optional)] size: Option<u32>) -> impl IntoView {
    let size = size.unwrap_or(16);
    view! {
        <span
            class="icon"
            data-icon=name
            style=format!("display: inline-block; width: {size}px; height: {size}px;")
        ></span>
    }
}
