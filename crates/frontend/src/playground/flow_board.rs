//! Read-only board with the latest flow the editor published. The flow
//! editor itself is an external surface; this board only renders its output.

use crate::playground::context::PlaygroundContext;
use leptos::prelude::*;

#[component]
pub fn FlowBoard() -> impl IntoView {
    let ctx = use_context::<PlaygroundContext>().expect("PlaygroundContext not found in context");

    view! {
        <div class="flow-board">
            <h2 class="section-title">"Flow Summary"</h2>

            {move || {
                let steps = ctx.flow_summary.get();
                if steps.is_empty() {
                    view! {
                        <div class="info-box">
                            "The flow editor has not published any steps yet."
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="flow-board__steps">
                            {steps
                                .into_iter()
                                .map(|step| {
                                    view! {
                                        <div class="flow-board__step">{step.content}</div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}

            <div class="info-box">
                "Review the steps, then press \"Compile Flow\" to pick a target blockchain."
            </div>
        </div>
    }
}
