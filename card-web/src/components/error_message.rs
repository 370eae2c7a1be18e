//! Error card for a failed connection attempt

use leptos::prelude::*;
use lib_core::view_model::ErrorPanel;
use lib_core::ConnectionError;

use super::Icon;
use crate::services::wallet::open_in_new_tab;

#[component]
pub fn ErrorMessage(
    error: ConnectionError,
    on_retry: Callback<()>,
    on_dismiss: Callback<()>,
    #[prop(into)] help_url: String,
    #[prop(into)] support_email: String,
) -> impl IntoView {
    let panel = ErrorPanel::for_error(&error);
    let tips = panel
        .troubleshooting
        .iter()
        .map(|tip| view! { <li>{*tip}</li> })
        .collect_view();
    let mailto = format!("mailto:{}", support_email);

    view! {
        <div class="card error-card" role="alert">
            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: var(--spacing-md);">
                <Icon name=panel.icon size=24/>
                <h3 style="margin: 0; color: var(--text-error);">{panel.title}</h3>
            </div>
            <p style="color: var(--text-secondary); margin-bottom: var(--spacing-md);">{panel.message}</p>

            <h4 style="margin-bottom: var(--spacing-sm);">"Troubleshooting Steps"</h4>
            <ul style="color: var(--text-secondary); margin-bottom: var(--spacing-lg);">{tips}</ul>

            <div style="display: flex; gap: 8px; flex-wrap: wrap;">
                <button class="btn" on:click=move |_| on_retry.run(())>
                    <Icon name="refresh-cw" size=14/>
                    " Try Again"
                </button>
                <button class="btn btn-ghost" on:click=move |_| on_dismiss.run(())>
                    "Dismiss"
                </button>
                <button class="btn btn-ghost" on:click=move |_| open_in_new_tab(&help_url)>
                    <Icon name="external-link" size=14/>
                    " Get Help"
                </button>
            </div>

            <p style="color: var(--text-secondary); font-size: 0.85em; margin-top: var(--spacing-md);">
                "Still having trouble? Contact "
                <a href=mailto>{support_email}</a>
            </p>
        </div>
    }
}
