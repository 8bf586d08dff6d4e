use web_sys::Document;

use crate::bindings::ListenerHandle;
use crate::shared::dom;

pub const CONFIRM_DELETE: &str = "Je, una uhakika unataka kufuta hii rekodi?";

/// Asks before any `.btn-delete` performs its default action. Cancelling
/// (or a window that cannot ask) suppresses the action.
pub fn bind_delete_confirmation(document: &Document) -> Vec<ListenerHandle> {
    dom::query_all(document, ".btn-delete")
        .into_iter()
        .filter_map(|button| {
            ListenerHandle::listen(&button, "click", |event| {
                let confirmed = dom::window()
                    .ok()
                    .and_then(|w| w.confirm_with_message(CONFIRM_DELETE).ok())
                    .unwrap_or(false);
                if !confirmed {
                    event.prevent_default();
                }
            })
            .map_err(|err| log::warn!("Failed to bind delete confirmation: {}", err))
            .ok()
        })
        .collect()
}
