//! Side-by-side ratings for the first catalog wallets

use leptos::prelude::*;
use lib_core::view_model::{compared_wallets, comparison_rows};
use shared::dto::wallet::WalletOption;

use super::Icon;

const MAX_RATING: u8 = 5;

#[component]
pub fn WalletComparison(catalog: Vec<WalletOption>) -> impl IntoView {
    let headers = compared_wallets(&catalog)
        .iter()
        .map(|w| view! { <th>{w.name.clone()}</th> })
        .collect_view();

    let rows = comparison_rows(&catalog)
        .into_iter()
        .map(|row| {
            let cells = row
                .ratings
                .into_iter()
                .map(|rating| {
                    let stars = (1..=MAX_RATING)
                        .map(|i| view! { <span class="star" class:filled=i <= rating></span> })
                        .collect_view();
                    view! { <td aria-label=format!("{rating} of {MAX_RATING}")>{stars}</td> }
                })
                .collect_view();
            view! {
                <tr>
                    <td><Icon name=row.icon size=14/>" "{row.label}</td>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="card wallet-comparison">
            <h3 class="card-title">"Wallet Comparison"</h3>
            <table style="width: 100%;">
                <thead>
                    <tr><th>"Feature"</th>{headers}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
