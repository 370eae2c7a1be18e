//! One selectable wallet in the catalog grid

use leptos::prelude::*;
use lib_core::view_model::wallet_option_view;
use lib_core::ControllerState;
use shared::dto::wallet::WalletOption;

use super::Icon;

#[component]
pub fn WalletOptionCard(
    option: WalletOption,
    #[prop(into)] state: Signal<ControllerState>,
    on_select: Callback<WalletOption>,
) -> impl IntoView {
    let option = StoredValue::new(option);
    let presentation = move || option.with_value(|o| wallet_option_view(o, &state.get()));

    let features = option.with_value(|o| {
        o.features
            .iter()
            .map(|feature| {
                view! {
                    <li style="display: flex; align-items: center; gap: 6px; color: var(--text-secondary); font-size: 0.85em;">
                        <Icon name="check" size=12/>
                        {feature.clone()}
                    </li>
                }
            })
            .collect_view()
    });

    view! {
        <div class="card wallet-option" class:recommended=option.with_value(|o| o.recommended)>
            {option.with_value(|o| o.recommended).then(|| view! {
                <span class="badge badge-accent">"Recommended"</span>
            })}
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: var(--spacing-sm);">
                <h3 style="margin: 0;">{option.with_value(|o| o.name.clone())}</h3>
                <span
                    class="badge"
                    class:badge-ok=move || option.with_value(|o| o.is_available())
                >
                    {move || presentation().status_label}
                </span>
            </div>
            <p style="color: var(--text-secondary); margin-bottom: var(--spacing-md);">
                {option.with_value(|o| o.description.clone())}
            </p>
            <ul style="list-style: none; padding: 0; margin: 0 0 var(--spacing-md) 0;">
                {features}
            </ul>
            <button
                class="btn"
                style="width: 100%;"
                disabled=move || presentation().disabled
                on:click=move |_| on_select.run(option.get_value())
            >
                {move || presentation().busy.then(|| view! { <span class="spinner"></span> })}
                {move || presentation().button_label}
            </button>
        </div>
    }
}
