//! TopHeader component - application top bar.
//!
//! Contains:
//! - Application brand
//! - Theme toggle
//! - The compile action that opens the flow-confirmation wizard

use crate::playground::context::PlaygroundContext;
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, Theme};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = leptos::context::use_context::<PlaygroundContext>()
        .expect("PlaygroundContext not found");
    let theme_ctx = use_theme();

    let open_compile = move |_| {
        ctx.open_compile();
    };

    let toggle_theme = move |_| {
        theme_ctx.toggle_theme();
    };

    // Nothing to confirm while the flow editor has not published a summary.
    let compile_disabled = Signal::derive(move || ctx.flow_summary.with(|steps| steps.is_empty()));

    view! {
        <div class="top-header">
            // Left section - brand
            <div class="top-header__brand">
                {icon("layers")}
                <span class="top-header__title">"Contract Playground"</span>
            </div>

            // Right section - actions
            <div class="top-header__actions">
                // Theme toggle
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_theme
                    title=move || match theme_ctx.get_theme() {
                        Theme::Dark => "Switch to light theme",
                        Theme::Light => "Switch to dark theme",
                    }
                >
                    {move || match theme_ctx.get_theme() {
                        Theme::Dark => icon("sun"),
                        Theme::Light => icon("moon"),
                    }}
                </button>

                // Compile wizard entry point
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=open_compile
                    disabled=compile_disabled
                >
                    "Compile Flow"
                </Button>
            </div>
        </div>
    }
}
