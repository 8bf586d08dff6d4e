use web_sys::{Document, Element};

use crate::bindings::ListenerHandle;
use crate::report::buttons::{has_inline_handler, ReportAction};
use crate::shared::dom;

/// Plain `window.print()` for `.btn-print` buttons. Buttons that are also
/// report toolbar buttons, or carry their own `onclick`, are left alone.
pub fn bind_print_buttons(document: &Document) -> Vec<ListenerHandle> {
    dom::query_all(document, ".btn-print")
        .into_iter()
        .filter(|button: &Element| {
            !has_inline_handler(button) && ReportAction::for_element(button).is_none()
        })
        .filter_map(|button| {
            ListenerHandle::listen(&button, "click", |_| {
                if let Ok(window) = dom::window() {
                    if let Err(err) = window.print() {
                        log::error!("Print error: {}", dom::js_err(err));
                    }
                }
            })
            .map_err(|err| log::warn!("Failed to bind print button: {}", err))
            .ok()
        })
        .collect()
}
