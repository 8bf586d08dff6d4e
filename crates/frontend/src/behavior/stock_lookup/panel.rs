//! Info panel under the quantity field showing the selected product's stock
use std::any::Any;

use leptos::prelude::*;
use stock_contracts::stock::{ProductStockResponse, StockStatus};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::shared::dom::js_err;

pub const PANEL_ID: &str = "stock-info";
pub const PANEL_CLASS: &str = "alert alert-info mt-2";

/// Badge class and label for statuses that deserve one
pub fn status_badge(status: StockStatus) -> Option<(&'static str, &'static str)> {
    match status {
        StockStatus::Low => Some(("badge bg-warning ms-2", "Stock Ndogo")),
        StockStatus::Out => Some(("badge bg-danger ms-2", "Hakuna Stock")),
        StockStatus::Normal => None,
    }
}

#[component]
fn StockInfo(info: RwSignal<Option<ProductStockResponse>>) -> impl IntoView {
    move || {
        info.get().map(|data| {
            let badge = status_badge(data.status)
                .map(|(class, label)| view! { <span class=class>{label}</span> });
            view! {
                <i class="fas fa-box"></i>
                " Stock inayopatikana: "
                <strong>{data.stock}</strong>
                {badge}
            }
        })
    }
}

/// The mounted panel. Content follows `show`; dropping it unmounts the view.
pub struct StockPanel {
    info: RwSignal<Option<ProductStockResponse>>,
    // Field order matters: the view unmounts before its signal's owner goes
    _mount: Box<dyn Any>,
    _owner: Owner,
}

impl StockPanel {
    /// Reuses an existing `#stock-info` or appends a new one after the
    /// quantity input.
    pub fn mount(document: &Document, quantity_input: &Element) -> Result<Self, String> {
        let element = match document.get_element_by_id(PANEL_ID) {
            Some(existing) => existing,
            None => {
                let div = document.create_element("div").map_err(js_err)?;
                div.set_id(PANEL_ID);
                div.set_class_name(PANEL_CLASS);
                let parent = quantity_input
                    .parent_node()
                    .ok_or("Quantity input has no parent")?;
                parent.append_child(&div).map_err(js_err)?;
                div
            }
        };
        let element = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| "Stock panel is not an HTML element".to_string())?;
        element.set_inner_html("");

        let owner = Owner::new();
        let info = owner.with(|| RwSignal::new(None::<ProductStockResponse>));
        let handle = leptos::mount::mount_to(element, move || view! { <StockInfo info=info /> });

        Ok(Self {
            info,
            _mount: Box::new(handle),
            _owner: owner,
        })
    }

    pub fn show(&self, data: ProductStockResponse) {
        self.info.set(Some(data));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge(StockStatus::Low), Some(("badge bg-warning ms-2", "Stock Ndogo")));
        assert_eq!(status_badge(StockStatus::Out), Some(("badge bg-danger ms-2", "Hakuna Stock")));
        assert_eq!(status_badge(StockStatus::Normal), None);
    }
}
