//! Page-lifetime event bindings.
//!
//! Every listener registered by the behavior layer is owned by a
//! [`ListenerHandle`]; dropping [`PageBindings`] unregisters all of them and
//! stops the refresh timer.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget};

use crate::behavior::stock_lookup::StockLookup;
use crate::behavior::{
    auto_refresh, delete_confirm, form_defaults, print_buttons, search, stock_level, tooltips,
};
use crate::config::PageConfig;
use crate::report::buttons;
use crate::shared::date_utils::now_local;
use crate::shared::dom::js_err;

/// An event listener that is removed again when the handle drops
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, String>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, callback);
    }
}

/// Everything [`init_page`] attached to the current page
#[derive(Default)]
pub struct PageBindings {
    listeners: Vec<ListenerHandle>,
    refresh: Option<Interval>,
    stock_lookup: Option<StockLookup>,
}

impl PageBindings {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_auto_refresh(&self) -> bool {
        self.refresh.is_some()
    }

    pub fn has_stock_lookup(&self) -> bool {
        self.stock_lookup.is_some()
    }
}

/// Applies the one-shot page rules and attaches all interactive behavior.
///
/// Call once per page; drop the result to detach.
pub fn init_page(document: &Document, config: Rc<PageConfig>) -> PageBindings {
    let now = now_local();
    let mut bindings = PageBindings::default();

    let defaulted = form_defaults::default_datetime_inputs(document, now);
    if defaulted > 0 {
        log::debug!("Defaulted {} datetime inputs", defaulted);
    }
    form_defaults::fill_reference_number(document, now.date());

    let decorated = stock_level::apply_stock_levels(document);
    log::debug!("Decorated {} stock level cells", decorated);

    bindings.listeners.extend(search::bind_table_search(document));
    bindings.listeners.extend(delete_confirm::bind_delete_confirmation(document));
    bindings.listeners.extend(print_buttons::bind_print_buttons(document));
    bindings
        .listeners
        .extend(buttons::bind_report_buttons(document, config.clone()));

    bindings.refresh = auto_refresh::start_auto_refresh(&config);

    match StockLookup::attach(document, config) {
        Ok(lookup) => bindings.stock_lookup = lookup,
        Err(err) => log::warn!("Stock lookup not attached: {}", err),
    }

    tooltips::init_tooltips(document);

    log::info!(
        "Page behavior ready: {} listeners, auto-refresh {}, stock lookup {}",
        bindings.listener_count(),
        if bindings.has_auto_refresh() { "on" } else { "off" },
        if bindings.has_stock_lookup() { "on" } else { "off" }
    );
    bindings
}
