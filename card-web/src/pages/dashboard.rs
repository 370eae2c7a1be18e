//! Dashboard - portfolio tiles, cards, contracts and recent activity

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::guard::Route;
use shared::utils::{format_address, format_percentage};

use crate::components::{Icon, RequireWallet};
use crate::state::app::{use_app_context, use_connection_state};
use crate::utils::format::{format_amount, format_timestamp, format_usd, status_class};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireWallet route=Route::Dashboard>
            <DashboardContent/>
        </RequireWallet>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_connection_state();
    let portfolio = ctx.fixtures.portfolio();

    let tiles = [
        ("wallet", "Total Balance", format_usd(portfolio.total_balance), format_percentage(portfolio.balance_change)),
        ("credit-card", "Active Cards", portfolio.active_cards.to_string(), format!("+{} this month", portfolio.new_cards_this_month)),
        ("file-code", "Active Contracts", portfolio.active_contracts.to_string(), format!("{} executions", portfolio.contract_executions)),
        ("activity", "Recent Transactions", portfolio.recent_transactions.to_string(), "Last 24 hours".to_string()),
    ]
    .into_iter()
    .map(|(icon, label, value, detail)| {
        view! {
            <div class="card stat-tile">
                <div style="display: flex; justify-content: space-between; color: var(--text-secondary);">
                    <span>{label}</span>
                    <Icon name=icon/>
                </div>
                <p style="font-size: 24px; font-weight: 700; margin: 8px 0;">{value}</p>
                <p style="color: var(--text-secondary); font-size: 0.85em;">{detail}</p>
            </div>
        }
    })
    .collect_view();

    let cards = ctx
        .fixtures
        .cards()
        .into_iter()
        .map(|card| {
            view! {
                <div class="card mini-card">
                    <div style="display: flex; justify-content: space-between;">
                        <strong>{card.name}</strong>
                        <span class=format!("badge {}", status_class(&card.status))>{format!("{:?}", card.status)}</span>
                    </div>
                    <p style="color: var(--text-secondary);">{card.card_type}" · "{card.card_id}</p>
                    <p style="font-weight: 700;">{format_amount(card.balance, &card.currency)}</p>
                </div>
            }
        })
        .collect_view();

    let contracts = ctx
        .fixtures
        .contracts()
        .into_iter()
        .map(|contract| {
            let executions = contract
                .recent_executions
                .iter()
                .map(|run| {
                    view! {
                        <li style="display: flex; justify-content: space-between; font-size: 0.85em;">
                            <span style="font-family: monospace;">{run.function.clone()}</span>
                            <span class=status_class(&run.status)>{format_timestamp(&run.timestamp)}</span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="card contract-card">
                    <div style="display: flex; justify-content: space-between;">
                        <strong>{contract.name}</strong>
                        <span class=format!("badge {}", status_class(&contract.status))>{format!("{:?}", contract.status)}</span>
                    </div>
                    <p style="color: var(--text-secondary);">{contract.description}</p>
                    <p style="font-family: monospace; font-size: 0.85em;">{format_address(&contract.address, 6, 6)}</p>
                    <p style="color: var(--text-secondary); font-size: 0.85em;">
                        {contract.execution_count}" executions · "{format!("{:.4} XLM gas", contract.gas_used)}
                    </p>
                    <ul style="list-style: none; padding: 0;">{executions}</ul>
                </div>
            }
        })
        .collect_view();

    let activity = ctx
        .fixtures
        .activities()
        .into_iter()
        .map(|item| {
            let amount = item
                .amount
                .map(|value| format_amount(value, item.currency.as_deref().unwrap_or("XLM")));
            view! {
                <li class="activity-item">
                    <div>
                        <strong>{item.title}</strong>
                        <p style="color: var(--text-secondary); margin: 0;">{item.description}</p>
                    </div>
                    <div style="text-align: right;">
                        {amount}
                        <p class=status_class(&item.status) style="font-size: 0.8em; margin: 0;">
                            {format_timestamp(&item.timestamp)}
                        </p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="page dashboard" style="max-width: 1200px; margin: 0 auto; padding: 32px 24px;">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;">
                <div>
                    <h1>{Route::Dashboard.title()}</h1>
                    <p style="color: var(--text-secondary);">
                        "Welcome back, "
                        {move || state.get().wallet_name}
                    </p>
                </div>
                <A href=Route::CardCreation.path()>
                    <span class="btn">"Create Card"</span>
                </A>
            </div>

            <section class="stat-grid">{tiles}</section>

            <div class="dashboard-columns">
                <section>
                    <h2>"Your Cards"</h2>
                    <div class="card-grid">{cards}</div>
                    <h2>"Smart Contracts"</h2>
                    <div class="card-grid">{contracts}</div>
                </section>
                <section class="card">
                    <h2 class="card-title">"Recent Activity"</h2>
                    <ul style="list-style: none; padding: 0;">{activity}</ul>
                    <A href=Route::TransactionHistory.path()>"View all transactions"</A>
                </section>
            </div>
        </div>
    }
}
