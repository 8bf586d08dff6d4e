//! Bootstrap tooltips, when the page loads Bootstrap's JS bundle
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use crate::shared::dom;

fn tooltip_constructor() -> Option<Function> {
    let bootstrap = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap")).ok()?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return None;
    }
    Reflect::get(&bootstrap, &JsValue::from_str("Tooltip"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Creates a `bootstrap.Tooltip` for every `[data-bs-toggle="tooltip"]`.
/// Returns how many were created.
pub fn init_tooltips(document: &Document) -> usize {
    let Some(constructor) = tooltip_constructor() else {
        log::debug!("Bootstrap not loaded, tooltips skipped");
        return 0;
    };
    let mut created = 0;
    for element in dom::query_all(document, r#"[data-bs-toggle="tooltip"]"#) {
        match Reflect::construct(&constructor, &Array::of1(&element)) {
            Ok(_) => created += 1,
            Err(err) => log::warn!("Tooltip init failed: {}", dom::js_err(err)),
        }
    }
    created
}
