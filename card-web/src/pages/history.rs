//! Transaction history with filters and totals

use chrono::NaiveDate;
use leptos::prelude::*;
use lib_core::guard::Route;
use lib_core::query::{TransactionFilter, TransactionSummary};
use shared::dto::records::Transaction;

use crate::components::RequireWallet;
use crate::state::app::use_app_context;
use crate::utils::choice::parse_choice;
use crate::utils::format::{format_amount, format_signed_amount, format_timestamp, status_class};

const KINDS: [(&str, &str); 6] = [
    ("all", "All Types"),
    ("card_payment", "Card Payment"),
    ("smart_contract", "Smart Contract"),
    ("transfer", "Transfer"),
    ("reward", "Reward"),
    ("stake", "Stake"),
];

const STATUSES: [(&str, &str); 4] = [
    ("all", "All Statuses"),
    ("confirmed", "Confirmed"),
    ("pending", "Pending"),
    ("failed", "Failed"),
];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <RequireWallet route=Route::TransactionHistory>
            <HistoryContent/>
        </RequireWallet>
    }
}

#[component]
fn HistoryContent() -> impl IntoView {
    let ctx = use_app_context();
    let transactions = StoredValue::new(ctx.fixtures.transactions());
    let filter = RwSignal::new(TransactionFilter::default());

    let matched = Memo::new(move |_| {
        let filter = filter.get();
        transactions.with_value(|all| filter.apply(all).into_iter().cloned().collect::<Vec<_>>())
    });
    let summary = move || matched.with(|txs| TransactionSummary::from_transactions(txs));

    let kind_options = KINDS
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view();
    let status_options = STATUSES
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view();

    view! {
        <div class="page history" style="max-width: 1200px; margin: 0 auto; padding: 32px 24px;">
            <h1>{Route::TransactionHistory.title()}</h1>

            <section class="stat-grid">
                <div class="card stat-tile">
                    <span>"Transactions"</span>
                    <p style="font-size: 24px; font-weight: 700;">{move || summary().count}</p>
                </div>
                <div class="card stat-tile">
                    <span>"Total In"</span>
                    <p class="price-up" style="font-size: 24px; font-weight: 700;">{move || format_amount(summary().total_in, "XLM")}</p>
                </div>
                <div class="card stat-tile">
                    <span>"Total Out"</span>
                    <p class="price-down" style="font-size: 24px; font-weight: 700;">{move || format_amount(summary().total_out, "XLM")}</p>
                </div>
                <div class="card stat-tile">
                    <span>"Net Flow"</span>
                    <p style="font-size: 24px; font-weight: 700;">{move || format_amount(summary().net_flow(), "XLM")}</p>
                    <p style="color: var(--text-secondary); font-size: 0.85em;">
                        {move || {
                            let s = summary();
                            format!("{} confirmed · {} pending · {} failed", s.confirmed, s.pending, s.failed)
                        }}
                    </p>
                </div>
            </section>

            <div class="filters card" style="display: flex; gap: 8px; flex-wrap: wrap; margin: 24px 0;">
                <input
                    type="search"
                    placeholder="Search description, counterparty or hash"
                    prop:value=move || filter.get().search
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select on:change=move |ev| filter.update(|f| f.kind = parse_choice(&event_target_value(&ev)))>
                    {kind_options}
                </select>
                <select on:change=move |ev| filter.update(|f| f.status = parse_choice(&event_target_value(&ev)))>
                    {status_options}
                </select>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || filter.get().show_incoming
                        on:change=move |ev| filter.update(|f| f.show_incoming = event_target_checked(&ev))
                    />
                    " Incoming"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || filter.get().show_outgoing
                        on:change=move |ev| filter.update(|f| f.show_outgoing = event_target_checked(&ev))
                    />
                    " Outgoing"
                </label>
                <input type="date" on:change=move |ev| filter.update(|f| f.date_from = parse_date(&event_target_value(&ev)))/>
                <input type="date" on:change=move |ev| filter.update(|f| f.date_to = parse_date(&event_target_value(&ev)))/>
                <button class="btn btn-ghost" on:click=move |_| filter.set(TransactionFilter::default())>
                    "Reset"
                </button>
            </div>

            <table class="card" style="width: 100%;">
                <thead>
                    <tr>
                        <th>"Date"</th><th>"Type"</th><th>"Description"</th><th>"Counterparty"</th>
                        <th>"Amount"</th><th>"Fees"</th><th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || matched.get() key=|tx| tx.id.clone() let:tx>
                        <TransactionRow tx=tx/>
                    </For>
                </tbody>
            </table>
            <Show when=move || matched.with(|txs| txs.is_empty()) fallback=|| ()>
                <p style="color: var(--text-secondary); text-align: center;">"No transactions match your filters."</p>
            </Show>
        </div>
    }
}

#[component]
fn TransactionRow(tx: Transaction) -> impl IntoView {
    view! {
        <tr>
            <td>{format_timestamp(&tx.timestamp)}</td>
            <td>{tx.kind.label()}</td>
            <td>
                {tx.description.clone()}
                {tx.card_name.clone().map(|card| view! { <span style="color: var(--text-secondary);">" · "{card}</span> })}
            </td>
            <td style="font-family: monospace;">{tx.counterparty.clone()}</td>
            <td class=status_class(&tx.direction)>{format_signed_amount(tx.amount, tx.direction)}</td>
            <td>{format!("{:.5}", tx.fees)}</td>
            <td><span class=format!("badge {}", status_class(&tx.status))>{format!("{:?}", tx.status)}</span></td>
        </tr>
    }
}
