//! Clipboard helper for the contract panel.
//!
//! Wraps the Web Clipboard API. Failures are silent; the UI simply shows
//! no feedback when the browser refuses the write.

use wasm_bindgen_futures::spawn_local;

/// Copy `text` to the system clipboard and run `on_success` once the
/// browser confirms the write.
pub fn copy_to_clipboard<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                .await
                .is_ok()
            {
                on_success();
            }
        }
    });
}
