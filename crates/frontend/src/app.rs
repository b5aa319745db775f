use crate::layout::Shell;
use crate::playground::compile_modal::CompileModal;
use crate::playground::context::PlaygroundContext;
use crate::playground::flow_board::FlowBoard;
use crate::shared::theme::ThemeProvider;
use contracts::playground::flow::FlowStep;
use leptos::prelude::*;

/// Stand-in summary for the flow editor, which lives outside this app.
/// The editor publishes through [`PlaygroundContext::set_flow_summary`];
/// this seed keeps the wizard exercisable on its own.
fn sample_flow_summary() -> Vec<FlowStep> {
    vec![
        FlowStep::new("Deploy an ERC-20 token named FLOW with 18 decimals"),
        FlowStep::new("Mint 1,000,000 FLOW to the deployer account"),
        FlowStep::new("Transfer 50,000 FLOW to the treasury multisig"),
        FlowStep::new("Emit a TreasuryFunded event with the transferred amount"),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the playground store to the whole app via context.
    let ctx = PlaygroundContext::new();
    provide_context(ctx);

    ctx.set_flow_summary(sample_flow_summary());
    ctx.init_url_integration();

    view! {
        <ThemeProvider>
            <Shell>
                <FlowBoard />
            </Shell>
            <Show when=move || ctx.compile_open.get()>
                <CompileModal />
            </Show>
        </ThemeProvider>
    }
}
