//! Card creation and management
//!
//! Served at both `/` and `/card-creation-management`. New cards go through
//! the four-step wizard and join the list once their contract is deployed.
//! The list lives only for the session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lib_core::deployment::{
    CardTier, ContractNetwork, ContractTemplate, CreationWizard, Priority, WizardStep, ASSET_CODES,
    CARD_COLORS,
};
use lib_core::guard::Route;
use lib_core::view_model::StepStatus;
use shared::dto::records::Card;
use shared::utils::truncate_address;

use crate::components::{Icon, RequireWallet};
use crate::state::app::use_app_context;
use crate::utils::format::{format_amount, format_timestamp, status_class};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Existing,
    Create,
}

#[component]
pub fn CardsPage(route: Route) -> impl IntoView {
    view! {
        <RequireWallet route=route>
            <CardsContent/>
        </RequireWallet>
    }
}

#[component]
fn CardsContent() -> impl IntoView {
    let ctx = use_app_context();
    let cards = RwSignal::new(ctx.fixtures.cards());
    let (tab, set_tab) = signal(Tab::Create);

    let tab_button = move |target: Tab, icon: &'static str, label: &'static str| {
        view! {
            <button
                class="btn btn-ghost tab"
                class:active=move || tab.get() == target
                on:click=move |_| set_tab.set(target)
            >
                <Icon name=icon size=14/>
                " "{label}
            </button>
        }
    };

    view! {
        <div class="page cards" style="max-width: 1200px; margin: 0 auto; padding: 32px 24px;">
            <h1>{Route::CardCreation.title()}</h1>
            <p style="color: var(--text-secondary);">
                "Design, deploy, and manage your blockchain-based cards on the Stellar network"
            </p>
            <div class="tabs" style="display: flex; gap: 8px; margin: 24px 0;">
                {tab_button(Tab::Create, "plus", "Create New")}
                {tab_button(Tab::Existing, "layers", "Manage Cards")}
            </div>
            {move || match tab.get() {
                Tab::Existing => view! { <CardGrid cards=cards/> }.into_any(),
                Tab::Create => view! { <CreateCard cards=cards/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CardGrid(cards: RwSignal<Vec<Card>>) -> impl IntoView {
    view! {
        <div class="card-grid">
            <For
                each=move || cards.get()
                key=|card| card.id.clone()
                children=|card| {
                    view! {
                        <div class="card mini-card">
                            <div style="display: flex; justify-content: space-between;">
                                <strong>{card.name.clone()}</strong>
                                <span class=format!("badge {}", status_class(&card.status))>
                                    {format!("{:?}", card.status)}
                                </span>
                            </div>
                            <p style="font-family: monospace; color: var(--text-secondary);">{card.card_id.clone()}</p>
                            {card.holder_name.clone().map(|holder| view! { <p>{holder.to_uppercase()}</p> })}
                            <p style="font-weight: 700;">{format_amount(card.balance, &card.currency)}</p>
                            <p style="color: var(--text-secondary); font-size: 0.8em;">
                                "Created " {format_timestamp(&card.created_at)}
                            </p>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] numeric: bool,
) -> impl IntoView {
    view! {
        <label style="display: block; margin-top: 12px;">{label}</label>
        <input
            type=if numeric { "number" } else { "text" }
            placeholder=placeholder
            prop:value=value
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

#[component]
fn CheckField(label: &'static str, #[prop(into)] checked: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <label style="display: flex; align-items: center; gap: 8px; margin-top: 12px;">
            <input type="checkbox" prop:checked=checked on:change=move |ev| on_change.run(event_target_checked(&ev))/>
            {label}
        </label>
    }
}

#[component]
fn CreateCard(cards: RwSignal<Vec<Card>>) -> impl IntoView {
    let wizard = RwSignal::new(CreationWizard::new());
    let step = Memo::new(move |_| wizard.with(|w| w.step()));

    let indicators = move || {
        let current = step.get();
        WizardStep::ALL
            .iter()
            .map(|&target| {
                let status = match target.status(current) {
                    StepStatus::Completed => "completed",
                    StepStatus::Active => "active",
                    StepStatus::Pending => "pending",
                };
                view! {
                    <button
                        class=format!("wizard-step {}", status)
                        disabled={target > current}
                        on:click=move |_| {
                            wizard.update(|w| {
                                w.go_to(target);
                            });
                        }
                    >
                        <Icon name=target.icon() size=16/>
                        <strong>" "{target.title()}</strong>
                        <span style="display: block; font-size: 0.8em; color: var(--text-secondary);">
                            {target.description()}
                        </span>
                    </button>
                }
            })
            .collect_view()
    };

    let validation = move || wizard.with(|w| w.check_current().err().map(|e| e.to_string()));
    let show_nav = move || matches!(step.get(), WizardStep::Design | WizardStep::Contract);

    view! {
        <div class="card wizard">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <h2 class="card-title">"Create New Card"</h2>
                <span style="color: var(--text-secondary);">
                    {move || format!("Step {} of {}", step.get().number(), WizardStep::ALL.len())}
                </span>
            </div>
            <div class="wizard-steps" style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px;">
                {indicators}
            </div>
        </div>

        {move || match step.get() {
            WizardStep::Design => view! { <DesignStep wizard=wizard/> }.into_any(),
            WizardStep::Contract => view! { <ContractStep wizard=wizard/> }.into_any(),
            WizardStep::Deployment => view! { <DeploymentStep wizard=wizard cards=cards/> }.into_any(),
            WizardStep::Complete => view! { <CompleteStep wizard=wizard/> }.into_any(),
        }}

        <Show when=show_nav fallback=|| ()>
            <div style="display: flex; justify-content: space-between; align-items: center; margin-top: 16px;">
                <button
                    class="btn btn-ghost"
                    disabled=move || step.get() == WizardStep::Design
                    on:click=move |_| {
                        wizard.update(|w| {
                            w.back();
                        });
                    }
                >
                    <Icon name="chevron-left" size=14/>
                    " Previous"
                </button>
                <span style="color: var(--text-error); font-size: 0.85em;">{validation}</span>
                <button
                    class="btn"
                    disabled=move || !wizard.with(|w| w.can_advance())
                    on:click=move |_| {
                        wizard.update(|w| {
                            if let Err(e) = w.advance() {
                                log::warn!("Cannot advance: {}", e);
                            }
                        });
                    }
                >
                    "Next "
                    <Icon name="chevron-right" size=14/>
                </button>
            </div>
        </Show>
    }
}

#[component]
fn CardPreview(wizard: RwSignal<CreationWizard>) -> impl IntoView {
    let design = move || wizard.with(|w| w.design.clone());

    view! {
        <div
            class="card card-preview"
            style=move || {
                let d = design();
                format!("background: {}; color: {};", d.background_color, d.text_color)
            }
        >
            <p style="opacity: 0.7;">{move || design().tier.label()}</p>
            <h3>{move || {
                let name = design().name;
                if name.trim().is_empty() { "Card Name".to_string() } else { name }
            }}</h3>
            <p style="font-family: monospace;">"****-****-****-1234"</p>
            <div style="display: flex; justify-content: space-between;">
                <span>{move || {
                    let holder = design().holder_name;
                    if holder.trim().is_empty() { "CARD HOLDER".to_string() } else { holder.to_uppercase() }
                }}</span>
                <span>"12/28"</span>
            </div>
            <p style="font-weight: 700;">{move || {
                let d = design();
                let balance = d.initial_balance.trim().parse::<f64>().unwrap_or(0.0);
                format_amount(balance, &d.asset_code)
            }}</p>
        </div>
    }
}

#[component]
fn DesignStep(wizard: RwSignal<CreationWizard>) -> impl IntoView {
    let tiers = CardTier::ALL
        .iter()
        .map(|tier| view! { <option value=tier.id()>{tier.label()}</option> })
        .collect_view();
    let assets = ASSET_CODES
        .iter()
        .map(|code| view! { <option value=*code>{*code}</option> })
        .collect_view();
    let colors = CARD_COLORS
        .iter()
        .map(|(value, label)| {
            view! {
                <button
                    class="color-swatch"
                    title=*label
                    style=format!("background: {}; width: 28px; height: 28px; border-radius: 50%;", value)
                    class:selected=move || wizard.with(|w| w.design.background_color == *value)
                    on:click=move |_| wizard.update(|w| w.design.background_color = value.to_string())
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="designer" style="display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-top: 16px;">
            <div class="card">
                <h3 class="card-title">"Card Design"</h3>
                <TextField
                    label="Card Name"
                    placeholder="My Stellar Card"
                    value=Signal::derive(move || wizard.with(|w| w.design.name.clone()))
                    on_input=Callback::new(move |v: String| wizard.update(|w| w.design.name = v))
                />
                <TextField
                    label="Card Holder Name"
                    placeholder="Card holder"
                    value=Signal::derive(move || wizard.with(|w| w.design.holder_name.clone()))
                    on_input=Callback::new(move |v: String| wizard.update(|w| w.design.holder_name = v))
                />
                <label style="display: block; margin-top: 12px;">"Card Type"</label>
                <select
                    prop:value=move || wizard.with(|w| w.design.tier.id())
                    on:change=move |ev| {
                        if let Some(tier) = CardTier::parse(&event_target_value(&ev)) {
                            wizard.update(|w| w.design.tier = tier);
                        }
                    }
                >
                    {tiers}
                </select>
                <label style="display: block; margin-top: 12px;">"Primary Asset"</label>
                <select
                    prop:value=move || wizard.with(|w| w.design.asset_code.clone())
                    on:change=move |ev| wizard.update(|w| w.design.asset_code = event_target_value(&ev))
                >
                    {assets}
                </select>
                <TextField
                    label="Initial Balance"
                    placeholder="0.00"
                    numeric=true
                    value=Signal::derive(move || wizard.with(|w| w.design.initial_balance.clone()))
                    on_input=Callback::new(move |v: String| wizard.update(|w| w.design.initial_balance = v))
                />
                <label style="display: block; margin-top: 12px;">"Background Color"</label>
                <div style="display: flex; gap: 8px;">{colors}</div>
            </div>
            <CardPreview wizard=wizard/>
        </div>
    }
}

#[component]
fn ContractStep(wizard: RwSignal<CreationWizard>) -> impl IntoView {
    let networks = ContractNetwork::ALL
        .iter()
        .map(|network| view! { <option value=network.id()>{network.label()}</option> })
        .collect_view();
    let templates = ContractTemplate::ALL
        .iter()
        .map(|template| view! { <option value=template.id()>{template.label()}</option> })
        .collect_view();

    let multisig = move || wizard.with(|w| w.contract.multisig_enabled);
    let staking = move || wizard.with(|w| w.contract.staking_enabled);

    view! {
        <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 24px; margin-top: 16px;">
            <div class="card">
                <h3 class="card-title">"Smart Contract Configuration"</h3>
                <label style="display: block;">"Deployment Network"</label>
                <select
                    prop:value=move || wizard.with(|w| w.contract.network.id())
                    on:change=move |ev| {
                        if let Some(network) = ContractNetwork::parse(&event_target_value(&ev)) {
                            wizard.update(|w| w.contract.network = network);
                        }
                    }
                >
                    {networks}
                </select>
                <label style="display: block; margin-top: 12px;">"Contract Template"</label>
                <select
                    prop:value=move || wizard.with(|w| w.contract.template.id())
                    on:change=move |ev| {
                        if let Some(template) = ContractTemplate::parse(&event_target_value(&ev)) {
                            wizard.update(|w| w.contract.template = template);
                        }
                    }
                >
                    {templates}
                </select>
                <p style="color: var(--text-secondary); font-size: 0.85em;">
                    {move || wizard.with(|w| w.contract.template.description())}
                </p>

                <h4 style="margin-top: 16px;">"Spending Limits"</h4>
                <TextField
                    label="Daily Limit"
                    numeric=true
                    value=Signal::derive(move || wizard.with(|w| w.contract.daily_limit.clone()))
                    on_input=Callback::new(move |v: String| wizard.update(|w| w.contract.daily_limit = v))
                />
                <TextField
                    label="Transaction Limit"
                    numeric=true
                    value=Signal::derive(move || wizard.with(|w| w.contract.transaction_limit.clone()))
                    on_input=Callback::new(move |v: String| wizard.update(|w| w.contract.transaction_limit = v))
                />
                <CheckField
                    label="Enable Velocity Checks"
                    checked=Signal::derive(move || wizard.with(|w| w.contract.velocity_checks))
                    on_change=Callback::new(move |v: bool| wizard.update(|w| w.contract.velocity_checks = v))
                />

                <h4 style="margin-top: 16px;">"Multi-Signature"</h4>
                <CheckField
                    label="Enable Multi-Signature"
                    checked=Signal::derive(multisig)
                    on_change=Callback::new(move |v: bool| wizard.update(|w| w.contract.multisig_enabled = v))
                />
                <Show when=multisig fallback=|| ()>
                    <TextField
                        label="Required Signatures"
                        numeric=true
                        value=Signal::derive(move || wizard.with(|w| w.contract.required_signatures.clone()))
                        on_input=Callback::new(move |v: String| wizard.update(|w| w.contract.required_signatures = v))
                    />
                    <TextField
                        label="Total Signers"
                        numeric=true
                        value=Signal::derive(move || wizard.with(|w| w.contract.total_signers.clone()))
                        on_input=Callback::new(move |v: String| wizard.update(|w| w.contract.total_signers = v))
                    />
                </Show>

                <h4 style="margin-top: 16px;">"Staking Rewards"</h4>
                <CheckField
                    label="Enable Staking Rewards"
                    checked=Signal::derive(staking)
                    on_change=Callback::new(move |v: bool| wizard.update(|w| w.contract.staking_enabled = v))
                />
                <Show when=staking fallback=|| ()>
                    <TextField
                        label="APY Rate (%)"
                        numeric=true
                        value=Signal::derive(move || wizard.with(|w| w.contract.apy_rate.clone()))
                        on_input=Callback::new(move |v: String| wizard.update(|w| w.contract.apy_rate = v))
                    />
                    <TextField
                        label="Minimum Stake"
                        numeric=true
                        value=Signal::derive(move || wizard.with(|w| w.contract.minimum_stake.clone()))
                        on_input=Callback::new(move |v: String| wizard.update(|w| w.contract.minimum_stake = v))
                    />
                </Show>

                <h4 style="margin-top: 16px;">"Advanced"</h4>
                <TextField
                    label="Gas Limit"
                    numeric=true
                    value=Signal::derive(move || wizard.with(|w| w.contract.gas_limit.clone()))
                    on_input=Callback::new(move |v: String| wizard.update(|w| w.contract.gas_limit = v))
                />
                <CheckField
                    label="Enable Upgrades"
                    checked=Signal::derive(move || wizard.with(|w| w.contract.upgradeable))
                    on_change=Callback::new(move |v: bool| wizard.update(|w| w.contract.upgradeable = v))
                />
                <CheckField
                    label="Emergency Pause"
                    checked=Signal::derive(move || wizard.with(|w| w.contract.pausable))
                    on_change=Callback::new(move |v: bool| wizard.update(|w| w.contract.pausable = v))
                />
            </div>
            <CardPreview wizard=wizard/>
        </div>
    }
}

#[component]
fn DeploymentStep(wizard: RwSignal<CreationWizard>, cards: RwSignal<Vec<Card>>) -> impl IntoView {
    let deployer = use_app_context().deployer;
    let deploying = RwSignal::new(false);
    let deploy_error = RwSignal::new(None::<String>);

    let priorities = Priority::ALL
        .iter()
        .map(|priority| view! { <option value=priority.id()>{priority.label()}</option> })
        .collect_view();
    let cost = move || wizard.with(|w| w.settings.cost());

    let on_deploy = move |_| {
        let request = match wizard.with_untracked(|w| w.request()) {
            Ok(request) => request,
            Err(e) => {
                deploy_error.set(Some(e.to_string()));
                return;
            }
        };
        deploy_error.set(None);
        deploying.set(true);

        let deployer = deployer.clone();
        leptos::task::spawn_local(async move {
            let result = deployer.deploy(request).await;
            // The page may be gone by now
            deploying.try_set(false);
            match result {
                Ok(receipt) => {
                    log::info!("Deployed {} at {}", receipt.contract_name, receipt.contract_address);
                    let card = receipt.card();
                    cards.try_update(|list| list.insert(0, card));
                    wizard.try_update(|w| w.complete(receipt));
                }
                Err(e) => {
                    log::warn!("Deployment failed: {}", e);
                    deploy_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 24px; margin-top: 16px;">
            <div class="card">
                <h3 class="card-title">
                    <Icon name="rocket" size=20/>
                    " Deployment Settings"
                </h3>
                <label style="display: block;">"Deployment Priority"</label>
                <select
                    prop:value=move || wizard.with(|w| w.settings.priority.id())
                    on:change=move |ev| {
                        if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                            wizard.update(|w| w.settings.priority = priority);
                        }
                    }
                >
                    {priorities}
                </select>
                <TextField
                    label="Contract Name"
                    placeholder="my-stellar-card"
                    value=Signal::derive(move || wizard.with(|w| w.settings.contract_name.clone()))
                    on_input=Callback::new(move |v: String| wizard.update(|w| w.settings.contract_name = v))
                />
                <CheckField
                    label="Auto-Initialize"
                    checked=Signal::derive(move || wizard.with(|w| w.settings.auto_initialize))
                    on_change=Callback::new(move |v: bool| wizard.update(|w| w.settings.auto_initialize = v))
                />
                <CheckField
                    label="Verify Contract"
                    checked=Signal::derive(move || wizard.with(|w| w.settings.verify_contract))
                    on_change=Callback::new(move |v: bool| wizard.update(|w| w.settings.verify_contract = v))
                />
                <CheckField
                    label="Enable Monitoring"
                    checked=Signal::derive(move || wizard.with(|w| w.settings.enable_monitoring))
                    on_change=Callback::new(move |v: bool| wizard.update(|w| w.settings.enable_monitoring = v))
                />
                <CheckField
                    label="Backup Configuration"
                    checked=Signal::derive(move || wizard.with(|w| w.settings.backup_config))
                    on_change=Callback::new(move |v: bool| wizard.update(|w| w.settings.backup_config = v))
                />

                <div class="cost-estimate" style="margin-top: 16px;">
                    <h4>"Estimated Deployment Cost"</h4>
                    <p>"Contract Deployment: " {move || format!("{:.1} XLM", cost().deployment)}</p>
                    <p>"Initialization: " {move || format!("{:.1} XLM", cost().initialization)}</p>
                    <p style="font-weight: 700;">"Total Cost: " {move || format!("{:.1} XLM", cost().total)}</p>
                    <p style="color: var(--text-secondary); font-size: 0.8em;">"Costs may vary based on network congestion"</p>
                </div>

                {move || deploy_error.get().map(|message| view! {
                    <p role="alert" style="color: var(--text-error);">{message}</p>
                })}

                <div style="display: flex; gap: 8px; margin-top: 16px;">
                    <button
                        class="btn btn-ghost"
                        disabled=move || deploying.get()
                        on:click=move |_| {
                            wizard.update(|w| {
                                w.back();
                            });
                        }
                    >
                        <Icon name="chevron-left" size=14/>
                        " Previous"
                    </button>
                    <button
                        class="btn"
                        style="flex: 1;"
                        disabled=move || deploying.get() || wizard.with(|w| w.settings.contract_name.trim().is_empty())
                        on:click=on_deploy
                    >
                        <Icon name="rocket" size=14/>
                        {move || if deploying.get() { " Deploying..." } else { " Deploy Contract" }}
                    </button>
                </div>
            </div>
            <CardPreview wizard=wizard/>
        </div>
    }
}

#[component]
fn CompleteStep(wizard: RwSignal<CreationWizard>) -> impl IntoView {
    let navigate = use_navigate();
    let receipt = move || wizard.with(|w| w.receipt().cloned());

    view! {
        <div class="card" style="text-align: center; margin-top: 16px;">
            <Icon name="check-circle" size=32/>
            <h2>"Card Created Successfully!"</h2>
            <p style="color: var(--text-secondary);">
                "Your blockchain card has been deployed to the Stellar network and is ready to use."
            </p>
            {move || receipt().map(|receipt| view! {
                <dl class="receipt" style="max-width: 420px; margin: 16px auto; text-align: left;">
                    <dt>"Contract Address"</dt>
                    <dd style="font-family: monospace;" title=receipt.contract_address.clone()>
                        {truncate_address(&receipt.contract_address)}
                    </dd>
                    <dt>"Network"</dt>
                    <dd>{receipt.network.label()}</dd>
                    <dt>"Card Name"</dt>
                    <dd>{receipt.design.name.clone()}</dd>
                    <dt>"Deployment Cost"</dt>
                    <dd>{format!("{:.1} XLM", receipt.cost.total)}</dd>
                </dl>
            })}
            <div style="display: flex; gap: 8px; justify-content: center;">
                <button class="btn btn-ghost" on:click=move |_| navigate(Route::Dashboard.path(), Default::default())>
                    <Icon name="eye" size=14/>
                    " View Dashboard"
                </button>
                <button class="btn" on:click=move |_| wizard.update(|w| w.reset())>
                    <Icon name="plus" size=14/>
                    " Create Another Card"
                </button>
            </div>
        </div>
    }
}
