//! Clipboard access through the async Web Clipboard API

use wasm_bindgen_futures::JsFuture;

use super::dom::{self, js_err};

/// Writes `text` to the system clipboard.
///
/// Resolves once the browser has accepted or rejected the write; there is
/// no retry.
pub async fn write_text(text: &str) -> Result<(), String> {
    let clipboard = dom::window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(js_err)
}
