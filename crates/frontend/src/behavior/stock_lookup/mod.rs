//! Stock availability lookup on the stock-out form.
//!
//! Changing `#id_product` fetches the product's stock and shows it next to
//! `#id_quantity`. Every change takes a new [`Ticket`]; a response is shown
//! only while its ticket is still the latest, so a slow earlier request can
//! never overwrite a newer answer.

pub mod api;
pub mod panel;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::task::spawn_local;
use stock_contracts::stock::ProductStockResponse;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use crate::bindings::ListenerHandle;
use crate::config::PageConfig;
use panel::StockPanel;

pub const PRODUCT_SELECT_ID: &str = "id_product";
pub const QUANTITY_INPUT_ID: &str = "id_quantity";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out request tickets; only the most recent one is current.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: Cell<u64>,
}

impl RequestGeneration {
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

/// Lazily mounted panel shared between the listener and in-flight requests
struct PanelSlot {
    document: Document,
    quantity_input: Element,
    panel: RefCell<Option<StockPanel>>,
}

impl PanelSlot {
    fn show(&self, data: ProductStockResponse) {
        let mut panel = self.panel.borrow_mut();
        if panel.is_none() {
            match StockPanel::mount(&self.document, &self.quantity_input) {
                Ok(mounted) => *panel = Some(mounted),
                Err(err) => {
                    log::error!("Failed to create stock panel: {}", err);
                    return;
                }
            }
        }
        if let Some(panel) = panel.as_ref() {
            panel.show(data);
        }
    }
}

/// Current `value` of the product field, whatever kind of control it is
fn field_value(element: &Element) -> String {
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    Reflect::get(element, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

/// Product id to look up; blank means nothing is selected
pub fn selected_product(raw: &str) -> Option<String> {
    let id = raw.trim();
    (!id.is_empty()).then(|| id.to_string())
}

/// The bound lookup; dropping it detaches the listener and the panel view.
pub struct StockLookup {
    _listener: ListenerHandle,
    _slot: Rc<PanelSlot>,
}

impl StockLookup {
    /// `Ok(None)` when the page is not a form with both fields.
    pub fn attach(
        document: &Document,
        config: Rc<PageConfig>,
    ) -> Result<Option<Self>, String> {
        let (Some(product_field), Some(quantity_input)) = (
            document.get_element_by_id(PRODUCT_SELECT_ID),
            document.get_element_by_id(QUANTITY_INPUT_ID),
        ) else {
            return Ok(None);
        };
        let slot = Rc::new(PanelSlot {
            document: document.clone(),
            quantity_input,
            panel: RefCell::new(None),
        });
        let generation = Rc::new(RequestGeneration::default());

        let field_for_change = product_field.clone();
        let slot_for_change = slot.clone();
        let listener = ListenerHandle::listen(&product_field, "change", move |_| {
            // A cleared selection still invalidates whatever is in flight
            let ticket = generation.issue();
            let Some(product_id) = selected_product(&field_value(&field_for_change)) else {
                return;
            };

            let generation = generation.clone();
            let slot = slot_for_change.clone();
            let api_base = config.api_base.clone();
            spawn_local(async move {
                match api::fetch_product_stock(&api_base, &product_id).await {
                    Ok(data) if generation.is_current(ticket) => slot.show(data),
                    Ok(_) => {
                        log::debug!("Discarded stale stock lookup for product {}", product_id)
                    }
                    Err(err) => {
                        log::error!("Stock lookup for product {} failed: {}", product_id, err)
                    }
                }
            });
        })?;

        Ok(Some(Self {
            _listener: listener,
            _slot: slot,
        }))
    }
}
