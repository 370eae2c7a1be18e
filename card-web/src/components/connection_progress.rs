//! Four-step progress card shown during a connection attempt

use leptos::prelude::*;
use lib_core::view_model::{progress_indicators, StepStatus};
use lib_core::Phase;

use super::Icon;

#[component]
pub fn ConnectionProgress(#[prop(into)] phase: Signal<Phase>) -> impl IntoView {
    let steps = move || {
        progress_indicators(phase.get())
            .into_iter()
            .enumerate()
            .map(|(i, indicator)| {
                let (class, marker) = match indicator.status {
                    StepStatus::Completed => ("step step-completed", view! { <Icon name="check" size=14/> }.into_any()),
                    StepStatus::Active => ("step step-active", view! { <span class="spinner"></span> }.into_any()),
                    StepStatus::Pending => ("step step-pending", view! { <span>{i + 1}</span> }.into_any()),
                };
                let connector = indicator.connector_done.map(|done| {
                    view! { <div class="step-connector" class:done=done></div> }
                });

                view! {
                    <div class=class data-step=indicator.step.id>
                        <div class="step-marker">{marker}</div>
                        <div>
                            <h4 style="margin: 0;">{indicator.step.title}</h4>
                            <p style="color: var(--text-secondary); margin: 0;">{indicator.step.description}</p>
                            {indicator.action.map(|action| view! {
                                <p class="step-action">{action}</p>
                            })}
                        </div>
                    </div>
                    {connector}
                }
            })
            .collect_view()
    };

    view! {
        <div class="card connection-progress">
            <h2 class="card-title">"Connecting Wallet"</h2>
            <div class="steps">{steps}</div>
        </div>
    }
}
