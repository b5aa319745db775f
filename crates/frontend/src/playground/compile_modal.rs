//! Compile wizard host: swaps between the flow-confirmation panel and the
//! contract landing panel according to the shared display state.

use crate::playground::context::PlaygroundContext;
use crate::playground::contract_panel::ContractPanel;
use crate::playground::generate_code::GenerateCode;
use crate::shared::modal::ModalFrame;
use contracts::playground::display_state::DisplayState;
use leptos::prelude::*;

#[component]
pub fn CompileModal() -> impl IntoView {
    let ctx = use_context::<PlaygroundContext>().expect("PlaygroundContext not found in context");

    let on_close = Callback::new(move |_| ctx.close_compile());

    // The confirmation panel gets callbacks instead of the signals
    // themselves, so it stays embeddable under any host that owns the state.
    let set_display_state = Callback::new(move |state| ctx.set_display_state(state));
    let set_source_code = Callback::new(move |code| ctx.set_source_code(code));
    let set_blockchain = Callback::new(move |chain| ctx.set_blockchain(chain));
    let append_to_source_code = Callback::new(move |chunk| ctx.append_to_source_code(chunk));

    view! {
        <ModalFrame on_close=on_close>
            {move || match ctx.display_state.get() {
                DisplayState::Generate => view! {
                    <GenerateCode
                        flow_summary=ctx.flow_summary
                        set_display_state=set_display_state
                        set_source_code=set_source_code
                        set_blockchain=set_blockchain
                        append_to_source_code=append_to_source_code
                        source_code=ctx.source_code
                    />
                }
                .into_any(),
                DisplayState::Contract => view! { <ContractPanel /> }.into_any(),
            }}
        </ModalFrame>
    }
}
