//! Marketplace - browse listings, quick-buy them and review your own

use leptos::prelude::*;
use lib_core::guard::Route;
use lib_core::purchase::{
    confirm_purchase, max_quantity, parse_quantity, PurchaseQuote, PurchaseReceipt, DEFAULT_SLIPPAGE_BPS,
    SLIPPAGE_OPTIONS,
};
use lib_core::query::{ListingQuery, PriceRange};
use shared::dto::records::MarketListing;
use shared::utils::{format_number, format_percentage};

use crate::components::{Icon, RequireWallet};
use crate::state::app::use_app_context;
use crate::utils::choice::parse_choice;
use crate::utils::constants::PRICE_RANGES;
use crate::utils::format::{format_amount, format_compact, format_timestamp, status_class};

const CATEGORIES: [(&str, &str); 5] = [
    ("all", "All Categories"),
    ("defi", "DeFi"),
    ("nft", "NFT"),
    ("utility", "Utility"),
    ("governance", "Governance"),
];

const SORTS: [(&str, &str); 5] = [
    ("newest", "Newest"),
    ("price-low", "Price: Low to High"),
    ("price-high", "Price: High to Low"),
    ("volume", "Volume"),
    ("yield", "Yield"),
];

fn options(choices: &'static [(&'static str, &'static str)]) -> impl IntoView {
    choices
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view()
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    view! {
        <RequireWallet route=Route::Marketplace>
            <MarketplaceContent/>
        </RequireWallet>
    }
}

#[component]
fn MarketplaceContent() -> impl IntoView {
    let ctx = use_app_context();
    let listings = StoredValue::new(ctx.fixtures.listings());
    let query = RwSignal::new(ListingQuery::default());
    let buying = RwSignal::new(None::<MarketListing>);
    let last_purchase = RwSignal::new(None::<PurchaseReceipt>);

    let on_buy = Callback::new(move |listing: MarketListing| buying.set(Some(listing)));
    let on_close = Callback::new(move |_: ()| buying.set(None));
    let on_confirmed = Callback::new(move |receipt: PurchaseReceipt| {
        buying.set(None);
        last_purchase.set(Some(receipt));
    });

    let visible = move || {
        let query = query.get();
        listings.with_value(|all| query.apply(all).into_iter().cloned().collect::<Vec<_>>())
    };

    let own = ctx
        .fixtures
        .my_listings()
        .into_iter()
        .map(|listing| {
            view! {
                <tr>
                    <td>{listing.card_name}</td>
                    <td>{format_amount(listing.price, "XLM")}</td>
                    <td>{listing.quantity}</td>
                    <td>{listing.views}</td>
                    <td><span class=format!("badge {}", status_class(&listing.status))>{format!("{:?}", listing.status)}</span></td>
                    <td>{format_timestamp(&listing.listed_at)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="page marketplace" style="max-width: 1200px; margin: 0 auto; padding: 32px 24px;">
            <h1>{Route::Marketplace.title()}</h1>

            {move || last_purchase.get().map(|receipt| view! {
                <div class="card success-card" role="status" style="margin-bottom: 16px;">
                    <strong>"Purchase confirmed"</strong>
                    <p>
                        {format!(
                            "{} x {} for {} XLM",
                            receipt.quote.quantity,
                            receipt.quote.listing_name,
                            format_number(receipt.quote.total, 4),
                        )}
                    </p>
                    <button class="btn btn-ghost" on:click=move |_| last_purchase.set(None)>"Dismiss"</button>
                </div>
            })}

            <div class="filters" style="display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 24px;">
                <input
                    type="search"
                    placeholder="Search cards or issuers"
                    prop:value=move || query.get().search
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
                <select on:change=move |ev| query.update(|q| q.category = parse_choice(&event_target_value(&ev)))>
                    {options(&CATEGORIES)}
                </select>
                <select on:change=move |ev| query.update(|q| q.price_range = PriceRange::parse(&event_target_value(&ev)))>
                    {options(PRICE_RANGES)}
                </select>
                <select on:change=move |ev| {
                    query.update(|q| q.sort = parse_choice(&event_target_value(&ev)).unwrap_or_default())
                }>
                    {options(&SORTS)}
                </select>
            </div>

            <div class="card-grid">
                <For each=visible key=|listing| listing.id.clone() let:listing>
                    <ListingCard listing=listing on_buy=on_buy/>
                </For>
            </div>
            <Show when=move || visible().is_empty() fallback=|| ()>
                <p style="color: var(--text-secondary); text-align: center;">"No listings match your filters."</p>
            </Show>

            <section class="card" style="margin-top: 32px;">
                <h2 class="card-title">"My Listings"</h2>
                <table style="width: 100%;">
                    <thead>
                        <tr>
                            <th>"Card"</th><th>"Price"</th><th>"Quantity"</th><th>"Views"</th><th>"Status"</th><th>"Listed"</th>
                        </tr>
                    </thead>
                    <tbody>{own}</tbody>
                </table>
            </section>

            {move || buying.get().map(|listing| view! {
                <QuickBuyModal listing=listing on_close=on_close on_confirmed=on_confirmed/>
            })}
        </div>
    }
}

#[component]
fn ListingCard(listing: MarketListing, on_buy: Callback<MarketListing>) -> impl IntoView {
    let change_class = if listing.change >= 0.0 { "price-up" } else { "price-down" };
    let selected = listing.clone();

    view! {
        <div class="card listing-card" class:featured=listing.is_featured>
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <strong>{listing.name.clone()}</strong>
                {listing.is_new.then(|| view! { <span class="badge badge-accent">"New"</span> })}
            </div>
            <p style="color: var(--text-secondary);">{listing.issuer.clone()}</p>
            <p style="font-size: 20px; font-weight: 700;">{format_amount(listing.price, "XLM")}</p>
            <p class=change_class>{format_percentage(listing.change)}</p>
            <dl class="listing-stats">
                <dt>"Volume"</dt><dd>{format_compact(listing.volume)}</dd>
                <dt>"Yield"</dt><dd>{format!("{:.1}%", listing.yield_pct)}</dd>
                <dt>"Holders"</dt><dd>{listing.holders}</dd>
                <dt>"Rating"</dt><dd>{format!("{:.1}", listing.rating)}</dd>
                <dt>"Risk"</dt><dd class=status_class(&listing.risk)>{format!("{:?}", listing.risk)}</dd>
            </dl>
            <button class="btn" style="width: 100%;" on:click=move |_| on_buy.run(selected.clone())>
                <Icon name="shopping-cart" size=14/>
                " Buy"
            </button>
        </div>
    }
}

#[component]
fn QuickBuyModal(
    listing: MarketListing,
    on_close: Callback<()>,
    on_confirmed: Callback<PurchaseReceipt>,
) -> impl IntoView {
    let listing = StoredValue::new(listing);
    let quantity = RwSignal::new(1u32);
    let slippage_bps = RwSignal::new(DEFAULT_SLIPPAGE_BPS);
    let agreed = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let quote = Memo::new(move |_| {
        listing.with_value(|l| PurchaseQuote::new(l, quantity.get(), slippage_bps.get()))
    });
    let max = listing.with_value(max_quantity);

    let slippage_buttons = SLIPPAGE_OPTIONS
        .iter()
        .map(|&(bps, label)| {
            view! {
                <button
                    class="btn btn-ghost"
                    class:active=move || slippage_bps.get() == bps
                    on:click=move |_| slippage_bps.set(bps)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let on_confirm = move |_| match confirm_purchase(quote.get_untracked(), agreed.get_untracked()) {
        Ok(receipt) => on_confirmed.run(receipt),
        Err(e) => error.set(Some(e.to_string())),
    };

    let line = |label: &'static str, value: Signal<String>| {
        view! {
            <div style="display: flex; justify-content: space-between;">
                <span style="color: var(--text-secondary);">{label}</span>
                <span>{value}</span>
            </div>
        }
    };

    view! {
        <div class="modal-backdrop" style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center;">
            <div class="card modal" role="dialog" aria-label="Quick Buy" style="width: 100%; max-width: 480px;">
                <div style="display: flex; justify-content: space-between; align-items: center;">
                    <h2 class="card-title">"Quick Buy"</h2>
                    <button class="btn btn-ghost" aria-label="Close" on:click=move |_| on_close.run(())>
                        <Icon name="x" size=16/>
                    </button>
                </div>
                <p>
                    <strong>{listing.with_value(|l| l.name.clone())}</strong>
                    " by " {listing.with_value(|l| l.issuer.clone())}
                </p>

                <label style="display: block; margin-top: 12px;">"Quantity"</label>
                <input
                    type="number"
                    min="1"
                    max=max.to_string()
                    prop:value=move || quantity.get().to_string()
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        quantity.set(listing.with_value(|l| parse_quantity(l, &raw)));
                    }
                />
                <p style="color: var(--text-secondary); font-size: 0.8em;">{format!("Maximum: {} cards", max)}</p>

                <label style="display: block; margin-top: 12px;">"Slippage Tolerance"</label>
                <div style="display: flex; gap: 8px;">{slippage_buttons}</div>

                <div class="breakdown" style="margin-top: 16px;">
                    {line("Subtotal", Signal::derive(move || format!("{} XLM", format_number(quote.get().subtotal, 4))))}
                    {line("Network Fee", Signal::derive(move || format!("{} XLM", format_number(quote.get().network_fee, 4))))}
                    {line("Platform Fee (0.25%)", Signal::derive(move || format!("{} XLM", format_number(quote.get().platform_fee, 4))))}
                    {line("Price Impact", Signal::derive(move || format!("{:.2}%", quote.get().price_impact_pct)))}
                    {line("Estimated Total", Signal::derive(move || format!("{} XLM", format_number(quote.get().total, 4))))}
                    {line("Maximum with Slippage", Signal::derive(move || format!("{} XLM", format_number(quote.get().max_total(), 4))))}
                </div>

                <label style="display: flex; align-items: center; gap: 8px; margin-top: 16px;">
                    <input
                        type="checkbox"
                        prop:checked=agreed
                        on:change=move |ev| {
                            agreed.set(event_target_checked(&ev));
                            error.set(None);
                        }
                    />
                    "I agree to the terms of service and understand the risks"
                </label>

                {move || error.get().map(|message| view! {
                    <p role="alert" style="color: var(--text-error);">{message}</p>
                })}

                <div style="display: flex; gap: 8px; margin-top: 16px;">
                    <button class="btn btn-ghost" style="flex: 1;" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn" style="flex: 1;" disabled=move || !agreed.get() on:click=on_confirm>
                        <Icon name="shopping-cart" size=14/>
                        " Confirm Purchase"
                    </button>
                </div>
            </div>
        </div>
    }
}
