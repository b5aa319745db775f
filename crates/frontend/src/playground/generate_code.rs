//! Flow-confirmation panel, the first step of the compile wizard.
//!
//! Shows the numbered flow summary for review, offers the fixed blockchain
//! choice set, and on confirmation records the choice, clears previously
//! accumulated source code, and navigates the parent to the contract panel.

use crate::shared::icons::icon;
use contracts::playground::blockchain::Blockchain;
use contracts::playground::display_state::DisplayState;
use contracts::playground::flow::FlowStep;
use leptos::prelude::*;
use thaw::*;

/// View model for the summary list: 1-based ordinal label plus the step
/// content, in input order.
fn step_rows(steps: &[FlowStep]) -> Vec<(String, String)> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| (format!("{}.", index + 1), step.content.clone()))
        .collect()
}

/// Visibility predicate for the confirmation action.
fn action_visible(selected: &str) -> bool {
    !selected.is_empty()
}

/// Confirmation side effects, in their required order: record the chosen
/// blockchain (when a setter was supplied), clear the accumulated source
/// code, navigate to the contract panel. Without a selection nothing runs.
///
/// Returns whether the confirmation fired.
fn apply_confirmation<B, S, D>(
    selection: Option<Blockchain>,
    set_blockchain: Option<B>,
    set_source_code: S,
    set_display_state: D,
) -> bool
where
    B: FnOnce(Blockchain),
    S: FnOnce(String),
    D: FnOnce(DisplayState),
{
    if let Some(chain) = selection {
        if let Some(set_blockchain) = set_blockchain {
            set_blockchain(chain);
        }
        set_source_code(String::new());
        set_display_state(DisplayState::Contract);
        true
    } else {
        false
    }
}

#[component]
pub fn GenerateCode(
    /// Ordered flow summary published by the flow editor.
    #[prop(into)]
    flow_summary: Signal<Vec<FlowStep>>,
    /// Navigation setter for the parent's displayed panel.
    set_display_state: Callback<DisplayState>,
    /// Replaces the accumulated source code.
    set_source_code: Callback<String>,
    /// Records the chosen blockchain. Skipped when not supplied.
    #[prop(optional)]
    set_blockchain: Option<Callback<Blockchain>>,
    /// Part of the caller's prop set; this panel never appends.
    append_to_source_code: Callback<String>,
    /// Part of the caller's prop set; this panel never reads it.
    #[prop(optional, into)]
    source_code: MaybeProp<String>,
) -> impl IntoView {
    let _ = append_to_source_code;
    let _ = source_code;

    let (selected_option, set_selected_option) = signal(String::new());

    let handle_generate = move |_| {
        apply_confirmation(
            Blockchain::from_code(&selected_option.get()),
            set_blockchain.map(|callback| move |chain| callback.run(chain)),
            move |code| set_source_code.run(code),
            move |state| set_display_state.run(state),
        );
    };

    view! {
        <div class="compile-panel">
            <h2 class="compile-panel__title">"Confirm Flow Summary?"</h2>

            // Rendered wholesale from the current summary so a live update
            // replaces row content even when the row count stays the same.
            <div class="compile-panel__summary">
                {move || {
                    step_rows(&flow_summary.get())
                        .into_iter()
                        .map(|(ordinal, content)| {
                            view! {
                                <div class="compile-panel__step">
                                    <span class="compile-panel__step-ordinal">{ordinal}</span>
                                    <span class="compile-panel__step-content">{content}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="form__group">
                <label class="form__label" for="blockchain-select">
                    "Select Blockchain:"
                </label>
                <select
                    id="blockchain-select"
                    class="form__select"
                    prop:value=move || selected_option.get()
                    on:change=move |ev| {
                        set_selected_option.set(event_target_value(&ev));
                    }
                >
                    <option value="" disabled=true selected=true>
                        "Choose a blockchain..."
                    </option>
                    {Blockchain::all()
                        .into_iter()
                        .map(|chain| {
                            view! {
                                <option value=chain.code()>{chain.display_name()}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            // The action is absent until a selection exists, never shown disabled.
            <Show when=move || action_visible(&selected_option.get())>
                <div class="compile-panel__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=handle_generate>
                        {icon("zap")}
                        "Continue to Contract Generation"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn steps(contents: &[&str]) -> Vec<FlowStep> {
        contents.iter().map(|content| FlowStep::new(*content)).collect()
    }

    #[test]
    fn test_step_rows_numbering_matches_input_order() {
        let rows = step_rows(&steps(&["swap", "bridge", "stake"]));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ("1.".to_string(), "swap".to_string()));
        assert_eq!(rows[1], ("2.".to_string(), "bridge".to_string()));
        assert_eq!(rows[2], ("3.".to_string(), "stake".to_string()));
    }

    #[test]
    fn test_step_rows_empty_summary() {
        assert!(step_rows(&[]).is_empty());
    }

    #[test]
    fn test_step_rows_replacement_updates_content_under_same_ordinals() {
        // A same-length summary update keeps the ordinal labels but must
        // carry the replacement content, not the rows it displaced.
        let before = step_rows(&steps(&["swap", "bridge"]));
        let after = step_rows(&steps(&["mint", "burn"]));
        assert_eq!(before[0].0, after[0].0);
        assert_eq!(before[1].0, after[1].0);
        assert_eq!(after[0].1, "mint");
        assert_eq!(after[1].1, "burn");
    }

    #[test]
    fn test_action_visibility_follows_selection() {
        assert!(!action_visible(""));
        assert!(action_visible("blockchain1"));
        assert!(action_visible("blockchain4"));
    }

    #[test]
    fn test_confirmation_runs_setters_in_order() {
        let calls = RefCell::new(Vec::new());
        let fired = apply_confirmation(
            Blockchain::from_code("blockchain1"),
            Some(|chain: Blockchain| {
                calls.borrow_mut().push(format!("blockchain:{}", chain.code()))
            }),
            |code: String| calls.borrow_mut().push(format!("source:{:?}", code)),
            |state: DisplayState| calls.borrow_mut().push(format!("panel:{}", state.as_str())),
        );
        assert!(fired);
        assert_eq!(
            calls.into_inner(),
            vec!["blockchain:blockchain1", "source:\"\"", "panel:contract"]
        );
    }

    #[test]
    fn test_confirmation_runs_setters_in_order_for_dojo() {
        let calls = RefCell::new(Vec::new());
        let fired = apply_confirmation(
            Blockchain::from_code("blockchain4"),
            Some(|chain: Blockchain| {
                calls.borrow_mut().push(format!("blockchain:{}", chain.code()))
            }),
            |code: String| calls.borrow_mut().push(format!("source:{:?}", code)),
            |state: DisplayState| calls.borrow_mut().push(format!("panel:{}", state.as_str())),
        );
        assert!(fired);
        assert_eq!(
            calls.into_inner(),
            vec!["blockchain:blockchain4", "source:\"\"", "panel:contract"]
        );
    }

    #[test]
    fn test_confirmation_without_blockchain_setter_still_clears_and_navigates() {
        let calls = RefCell::new(Vec::new());
        let fired = apply_confirmation(
            Some(Blockchain::Starknet),
            None::<fn(Blockchain)>,
            |code: String| calls.borrow_mut().push(format!("source:{:?}", code)),
            |state: DisplayState| calls.borrow_mut().push(format!("panel:{}", state.as_str())),
        );
        assert!(fired);
        assert_eq!(calls.into_inner(), vec!["source:\"\"", "panel:contract"]);
    }

    #[test]
    fn test_confirmation_without_selection_is_a_no_op() {
        let calls = RefCell::new(Vec::new());
        let fired = apply_confirmation(
            Blockchain::from_code(""),
            Some(|_chain: Blockchain| calls.borrow_mut().push("blockchain")),
            |_code: String| calls.borrow_mut().push("source"),
            |_state: DisplayState| calls.borrow_mut().push("panel"),
        );
        assert!(!fired);
        assert!(calls.into_inner().is_empty());
    }
}
