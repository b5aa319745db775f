//! Contract landing panel, where the wizard lands after confirmation.
//!
//! Contract generation itself runs outside this app; the panel shows what
//! the playground state holds (chosen blockchain, accumulated source code)
//! and offers the way back to the summary panel.

use crate::playground::context::PlaygroundContext;
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::icons::icon;
use contracts::playground::display_state::DisplayState;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ContractPanel() -> impl IntoView {
    let ctx = use_context::<PlaygroundContext>().expect("PlaygroundContext not found in context");

    let (copied, set_copied) = signal(false);

    let handle_back = move |_| {
        ctx.set_display_state(DisplayState::Generate);
    };

    let handle_copy = move |_| {
        let code = ctx.source_code.get();
        copy_to_clipboard(&code, move || {
            set_copied.set(true);
            spawn_local(async move {
                TimeoutFuture::new(1500).await;
                set_copied.set(false);
            });
        });
    };

    let blockchain_label = move || {
        ctx.blockchain
            .get()
            .map(|chain| chain.display_name())
            .unwrap_or("not selected")
    };

    let has_code = move || ctx.source_code.with(|code| !code.is_empty());

    view! {
        <div class="compile-panel">
            <h2 class="compile-panel__title">"Contract Generation"</h2>

            <div class="compile-panel__target">
                <span class="compile-panel__target-label">"Target blockchain:"</span>
                <span class="compile-panel__target-value">{blockchain_label}</span>
            </div>

            {move || {
                if has_code() {
                    view! {
                        <pre class="code-box compile-panel__source">
                            {move || ctx.source_code.get()}
                        </pre>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="info-box">
                            "No source code yet. The generator streams contract code into this panel."
                        </div>
                    }
                    .into_any()
                }
            }}

            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Button appearance=ButtonAppearance::Secondary on_click=handle_back>
                    {icon("arrow-left")}
                    "Back to Summary"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=handle_copy
                    disabled=Signal::derive(move || !has_code())
                >
                    {move || if copied.get() { icon("check") } else { icon("copy") }}
                    {move || if copied.get() { "Copied" } else { "Copy Code" }}
                </Button>
            </Flex>
        </div>
    }
}
