//! Print and "PDF" export through the browser print dialog.
//!
//! Page chrome is hidden while the dialog is up and put back by a timer,
//! whether or not the user actually printed.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::PageConfig;
use crate::shared::dom;

/// Single-element chrome hidden for printing (first match each)
pub const CHROME_SELECTORS: [&str; 5] = [
    ".sidebar",
    ".navbar",
    ".footer",
    ".page-actions",
    ".btn-group",
];

/// Anything whose inline `display` can be read and set
pub trait Displayable {
    fn display(&self) -> String;
    fn set_display(&self, value: &str);
}

impl Displayable for HtmlElement {
    fn display(&self) -> String {
        dom::display_of(self)
    }

    fn set_display(&self, value: &str) {
        dom::set_display(self, value)
    }
}

/// Elements hidden for printing together with their prior `display`.
///
/// `restore` consumes the guard, so elements come back exactly once.
#[must_use = "hidden chrome stays hidden until restore() is called"]
pub struct ChromeGuard<E: Displayable> {
    hidden: Vec<(E, String)>,
}

impl<E: Displayable> ChromeGuard<E> {
    pub fn hide(elements: impl IntoIterator<Item = E>) -> Self {
        let hidden = elements
            .into_iter()
            .map(|element| {
                let prior = element.display();
                element.set_display("none");
                (element, prior)
            })
            .collect();
        Self { hidden }
    }

    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    pub fn restore(self) {
        // Reverse order: an element listed twice ends up with its original value
        for (element, prior) in self.hidden.into_iter().rev() {
            element.set_display(&prior);
        }
    }
}

/// Chrome hiding shared by overlapping print calls.
///
/// The first `begin` hides and records prior values; later calls made before
/// every pending restore has fired reuse that guard. The chrome comes back
/// once, when the last outstanding `finish` runs.
pub struct PrintChrome<E: Displayable> {
    guard: Option<ChromeGuard<E>>,
    outstanding: usize,
}

impl<E: Displayable> Default for PrintChrome<E> {
    fn default() -> Self {
        Self {
            guard: None,
            outstanding: 0,
        }
    }
}

impl<E: Displayable> PrintChrome<E> {
    /// Returns `true` when this call did the hiding.
    pub fn begin(&mut self, elements: impl FnOnce() -> Vec<E>) -> bool {
        self.outstanding += 1;
        if self.guard.is_some() {
            return false;
        }
        self.guard = Some(ChromeGuard::hide(elements()));
        true
    }

    pub fn finish(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
        if self.outstanding == 0 {
            if let Some(guard) = self.guard.take() {
                guard.restore();
            }
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.guard.is_some()
    }
}

thread_local! {
    static PRINT_CHROME: RefCell<PrintChrome<HtmlElement>> = RefCell::new(PrintChrome::default());
}

/// Navigation, sidebar, footer, action groups and every `.btn` that is not
/// a `.badge`.
pub fn chrome_elements(document: &Document) -> Vec<HtmlElement> {
    let singles = CHROME_SELECTORS
        .iter()
        .filter_map(|selector| document.query_selector(selector).ok().flatten());
    let buttons = dom::query_all(document, ".btn")
        .into_iter()
        .filter(|btn| !btn.class_list().contains("badge"));
    singles
        .chain(buttons)
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn print_report(config: &PageConfig) {
    let window = match dom::window() {
        Ok(window) => window,
        Err(err) => {
            log::error!("Print error: {}", err);
            return;
        }
    };

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("Print error: {}", err);
            let _ = window.print();
            return;
        }
    };
    let hid = PRINT_CHROME.with(|chrome| chrome.borrow_mut().begin(|| chrome_elements(&document)));
    if !hid {
        log::debug!("Print chrome already hidden, reusing pending restore");
    }

    if let Err(err) = window.print() {
        log::error!("Print error: {}", dom::js_err(err));
    }

    Timeout::new(config.print_restore_delay_ms, || {
        PRINT_CHROME.with(|chrome| chrome.borrow_mut().finish())
    })
    .forget();
}

/// No PDF is generated here; the print dialog's "save as PDF" does it.
pub fn export_pdf(config: &PageConfig) {
    print_report(config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeElement {
        display: Rc<RefCell<String>>,
        writes: Rc<RefCell<usize>>,
    }

    impl FakeElement {
        fn new(display: &str) -> Self {
            Self {
                display: Rc::new(RefCell::new(display.to_string())),
                writes: Rc::new(RefCell::new(0)),
            }
        }
    }

    impl Displayable for FakeElement {
        fn display(&self) -> String {
            self.display.borrow().clone()
        }

        fn set_display(&self, value: &str) {
            *self.display.borrow_mut() = value.to_string();
            *self.writes.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_hide_then_restore_prior_values() {
        let navbar = FakeElement::new("");
        let sidebar = FakeElement::new("flex");
        let guard = ChromeGuard::hide(vec![navbar.clone(), sidebar.clone()]);

        assert_eq!(guard.len(), 2);
        assert_eq!(navbar.display(), "none");
        assert_eq!(sidebar.display(), "none");

        guard.restore();
        assert_eq!(navbar.display(), "");
        assert_eq!(sidebar.display(), "flex");
        // one write to hide, one to restore
        assert_eq!(*navbar.writes.borrow(), 2);
        assert_eq!(*sidebar.writes.borrow(), 2);
    }

    #[test]
    fn test_element_listed_twice_keeps_original() {
        let button = FakeElement::new("inline-block");
        let guard = ChromeGuard::hide(vec![button.clone(), button.clone()]);
        assert_eq!(button.display(), "none");

        guard.restore();
        assert_eq!(button.display(), "inline-block");
    }

    #[test]
    fn test_overlapping_prints_restore_prior_value() {
        let navbar = FakeElement::new("");
        let mut chrome = PrintChrome::default();

        assert!(chrome.begin(|| vec![navbar.clone()]));
        // second print starts while the first restore is still pending
        assert!(!chrome.begin(|| vec![navbar.clone()]));
        assert_eq!(navbar.display(), "none");

        chrome.finish();
        assert_eq!(navbar.display(), "none");
        assert!(chrome.is_hidden());

        chrome.finish();
        assert_eq!(navbar.display(), "");
        assert!(!chrome.is_hidden());
        assert_eq!(*navbar.writes.borrow(), 2);
    }

    #[test]
    fn test_print_after_restore_hides_again() {
        let footer = FakeElement::new("block");
        let mut chrome = PrintChrome::default();

        assert!(chrome.begin(|| vec![footer.clone()]));
        chrome.finish();
        assert_eq!(footer.display(), "block");

        assert!(chrome.begin(|| vec![footer.clone()]));
        assert_eq!(footer.display(), "none");
        chrome.finish();
        assert_eq!(footer.display(), "block");

        // stray finish with nothing pending is a no-op
        chrome.finish();
        assert_eq!(footer.display(), "block");
    }

    #[test]
    fn test_empty_guard() {
        let guard = ChromeGuard::<FakeElement>::hide(Vec::new());
        assert!(guard.is_empty());
        guard.restore();
    }
}
