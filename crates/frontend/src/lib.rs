//! Browser behavior layer of the stock-management web app.
//!
//! Loaded as a WASM module on every server-rendered page. On start it applies
//! the page rules (form defaults, stock colouring, search, confirmations,
//! dashboard refresh, stock lookup) and wires the report toolbar. The report
//! actions are also exported for inline `onclick` handlers.

pub mod behavior;
pub mod bindings;
pub mod config;
pub mod error;
pub mod report;
pub mod shared;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use bindings::PageBindings;
use config::PageConfig;
use shared::dom;

thread_local! {
    static CONFIG: RefCell<Option<Rc<PageConfig>>> = const { RefCell::new(None) };
    static BINDINGS: RefCell<Option<PageBindings>> = const { RefCell::new(None) };
}

fn current_config() -> Rc<PageConfig> {
    CONFIG.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| {
                Rc::new(
                    dom::document()
                        .map(|document| PageConfig::load(&document))
                        .unwrap_or_default(),
                )
            })
            .clone()
    })
}

/// Binds the behavior layer to the loaded document, replacing any earlier
/// bindings.
#[wasm_bindgen]
pub fn hydrate() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("Page behavior not started: {}", err);
            return;
        }
    };
    let bindings = bindings::init_page(&document, current_config());
    let previous = BINDINGS.with(|slot| slot.borrow_mut().replace(bindings));
    drop(previous);
}

/// Detaches every listener and timer attached by [`hydrate`].
#[wasm_bindgen]
pub fn teardown() {
    let bindings = BINDINGS.with(|slot| slot.borrow_mut().take());
    if bindings.is_some() {
        log::info!("Page behavior detached");
    }
    drop(bindings);
}

#[wasm_bindgen(js_name = exportToExcel)]
pub fn export_to_excel(trigger: Option<HtmlElement>) {
    report::export_csv(&current_config(), trigger);
}

#[wasm_bindgen(js_name = printReport)]
pub fn print_report() {
    report::print_report(&current_config());
}

#[wasm_bindgen(js_name = exportToPDF)]
pub fn export_to_pdf() {
    report::export_pdf(&current_config());
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard() {
    report::copy_table(&current_config());
}

#[wasm_bindgen(js_name = shareWhatsApp)]
pub fn share_whatsapp() {
    report::share_report(&current_config());
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("📊 Stock page behavior loading");

    let (Ok(window), Ok(document)) = (dom::window(), dom::document()) else {
        log::error!("No window or document, nothing to bind");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(hydrate);
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            log::error!("Failed to wait for DOMContentLoaded: {}", dom::js_err(err));
        }
    } else {
        hydrate();
    }

    // Both listeners live as long as the page itself
    let on_show = Closure::wrap(Box::new(|| {
        // Restored from the back/forward cache after a teardown
        if BINDINGS.with(|slot| slot.borrow().is_none()) {
            hydrate();
        }
    }) as Box<dyn FnMut()>);
    if let Err(err) =
        window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref())
    {
        log::warn!("Failed to bind pageshow: {}", dom::js_err(err));
    }
    on_show.forget();

    let on_hide = Closure::wrap(Box::new(teardown) as Box<dyn FnMut()>);
    if let Err(err) =
        window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())
    {
        log::warn!("Failed to bind pagehide: {}", dom::js_err(err));
    }
    on_hide.forget();
}
