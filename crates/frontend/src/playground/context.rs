use contracts::playground::blockchain::Blockchain;
use contracts::playground::display_state::DisplayState;
use contracts::playground::flow::FlowStep;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter carrying the wizard's active panel.
const PANEL_QUERY_KEY: &str = "panel";

/// Parent-owned playground state, provided to the whole app via context.
///
/// The flow-confirmation panel never touches these signals directly: the
/// wizard hands it callbacks built from the setter methods below, so the
/// panel stays prop-driven like any other embeddable widget.
#[derive(Clone, Copy)]
pub struct PlaygroundContext {
    pub display_state: RwSignal<DisplayState>,
    pub source_code: RwSignal<String>,
    pub blockchain: RwSignal<Option<Blockchain>>,
    pub flow_summary: RwSignal<Vec<FlowStep>>,
    pub compile_open: RwSignal<bool>,
}

impl PlaygroundContext {
    pub fn new() -> Self {
        Self {
            display_state: RwSignal::new(DisplayState::default()),
            source_code: RwSignal::new(String::new()),
            blockchain: RwSignal::new(None),
            flow_summary: RwSignal::new(vec![]),
            compile_open: RwSignal::new(false),
        }
    }

    pub fn set_display_state(&self, state: DisplayState) {
        leptos::logging::log!("🧭 set_display_state: '{}'", state.as_str());
        self.display_state.set(state);
    }

    pub fn set_source_code(&self, code: String) {
        leptos::logging::log!("📝 set_source_code: {} bytes", code.len());
        self.source_code.set(code);
    }

    pub fn append_to_source_code(&self, chunk: String) {
        self.source_code.update(|code| code.push_str(&chunk));
    }

    pub fn set_blockchain(&self, chain: Blockchain) {
        leptos::logging::log!("🔗 set_blockchain: '{}'", chain.code());
        self.blockchain.set(Some(chain));
    }

    pub fn set_flow_summary(&self, steps: Vec<FlowStep>) {
        leptos::logging::log!("📋 set_flow_summary: {} steps", steps.len());
        self.flow_summary.set(steps);
    }

    pub fn open_compile(&self) {
        leptos::logging::log!("🪟 open_compile");
        self.compile_open.set(true);
    }

    /// Close the wizard. The next open starts back at the summary panel.
    pub fn close_compile(&self) {
        leptos::logging::log!("🪟 close_compile");
        self.compile_open.set(false);
        self.display_state.set(DisplayState::default());
    }

    /// Mirror the active panel into the `?panel=` query parameter and restore
    /// it on startup, so a reloaded page reopens the wizard where it was.
    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(state) = params
            .get(PANEL_QUERY_KEY)
            .and_then(|value| DisplayState::from_str(value))
        {
            self.display_state.set(state);
            self.compile_open.set(true);
        }

        let this = *self;
        Effect::new(move |_| {
            let target = if this.compile_open.get() {
                let query_string = serde_qs::to_string(&HashMap::from([(
                    PANEL_QUERY_KEY.to_string(),
                    this.display_state.get().as_str().to_string(),
                )]))
                .unwrap_or_default();
                format!("?{}", query_string)
            } else {
                String::new()
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != target {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let url = if target.is_empty() {
                            w.location().pathname().unwrap_or_else(|_| "/".to_string())
                        } else {
                            target.clone()
                        };
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_compile_resets_wizard_to_summary_panel() {
        let ctx = PlaygroundContext::new();
        ctx.open_compile();
        ctx.set_display_state(DisplayState::Contract);
        assert!(ctx.compile_open.get());
        assert_eq!(ctx.display_state.get(), DisplayState::Contract);

        ctx.close_compile();
        assert!(!ctx.compile_open.get());
        assert_eq!(ctx.display_state.get(), DisplayState::Generate);

        // A reopen lands on the summary panel, not where the wizard left off.
        ctx.open_compile();
        assert!(ctx.compile_open.get());
        assert_eq!(ctx.display_state.get(), DisplayState::Generate);
    }
}
