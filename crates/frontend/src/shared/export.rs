//! Browser file download for generated reports
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::dom::{self, js_err};

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Wraps `content` in a Blob and triggers a download named `filename`.
///
/// The object URL is revoked once the click has been dispatched.
pub fn download_text(content: &str, filename: &str, mime: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {}", js_err(e)))?;

    let document = dom::document()?;
    let body = document.body().ok_or("No body element")?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {}", js_err(e)))?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    dom::set_display(&anchor, "none");

    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_err)?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {}", js_err(e)))
}
