//! Thin helpers over `web_sys` used by every behavior binding.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, NodeList, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn document() -> Result<Document, String> {
    window()?
        .document()
        .ok_or_else(|| "No document object".to_string())
}

/// Renders a thrown JS value for logs and error strings
pub fn js_err(value: JsValue) -> String {
    format!("{:?}", value)
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`, in document order.
/// An invalid selector yields an empty list.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// Same as [`query_all`] but scoped to the descendants of `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// Trimmed `textContent` of an element
pub fn text_of(element: &Element) -> String {
    element
        .text_content()
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}

/// Inline `display` value; empty when the element is not styled inline.
pub fn display_of(element: &HtmlElement) -> String {
    element
        .style()
        .get_property_value("display")
        .unwrap_or_default()
}

/// Sets the inline `display` value. An empty value drops the inline
/// property so the stylesheet decides again.
pub fn set_display(element: &HtmlElement, value: &str) {
    let style = element.style();
    let result = if value.is_empty() {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", value)
    };
    if let Err(err) = result {
        log::warn!("Failed to set display: {}", js_err(err));
    }
}

pub fn is_hidden(element: &Element) -> bool {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| display_of(el) == "none")
        .unwrap_or(false)
}

pub fn set_disabled(element: &HtmlElement, disabled: bool) {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        let _ = element.set_attribute("disabled", "");
    } else {
        let _ = element.remove_attribute("disabled");
    }
}

pub fn is_disabled(element: &HtmlElement) -> bool {
    match element.dyn_ref::<HtmlButtonElement>() {
        Some(button) => button.disabled(),
        None => element.has_attribute("disabled"),
    }
}

/// Blocking browser notification
pub fn notify(message: &str) {
    match window() {
        Ok(window) => {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("alert failed: {}", js_err(err));
            }
        }
        Err(err) => log::warn!("{}: {}", err, message),
    }
}
