//! Wiring of the report toolbar buttons.
//!
//! A button opts in with `data-report-action="csv|print|pdf|copy|share"`.
//! Without the attribute it is recognised by its Bootstrap class and label,
//! e.g. a `.btn-success` reading "Excel". Buttons with an inline `onclick`
//! already call the exported entry points and are never bound again.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{copy_table, export_csv, export_pdf, print_report, share_report};
use crate::bindings::ListenerHandle;
use crate::config::PageConfig;
use crate::shared::dom;

pub const ACTION_ATTRIBUTE: &str = "data-report-action";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    Csv,
    Print,
    Pdf,
    Copy,
    Share,
}

impl ReportAction {
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" | "excel" => Some(Self::Csv),
            "print" => Some(Self::Print),
            "pdf" => Some(Self::Pdf),
            "copy" => Some(Self::Copy),
            "share" | "whatsapp" => Some(Self::Share),
            _ => None,
        }
    }

    /// Recognises a toolbar button by class and label
    pub fn detect(classes: &[&str], label: &str) -> Option<Self> {
        let has = |class: &str| classes.contains(&class);
        if has("btn-success") && label.contains("WhatsApp") {
            Some(Self::Share)
        } else if has("btn-success") && label.contains("Excel") {
            Some(Self::Csv)
        } else if has("btn-primary") && label.contains("Print") {
            Some(Self::Print)
        } else if has("btn-danger") && label.contains("PDF") {
            Some(Self::Pdf)
        } else if has("btn-info") && (label.contains("Nakili") || label.contains("Copy")) {
            Some(Self::Copy)
        } else {
            None
        }
    }

    /// Action to bind for a button, if any
    pub fn resolve(
        action_attribute: Option<&str>,
        inline_handler: bool,
        classes: &[&str],
        label: &str,
    ) -> Option<Self> {
        if inline_handler {
            return None;
        }
        match action_attribute {
            Some(value) => Self::from_attribute(value),
            None => Self::detect(classes, label),
        }
    }

    pub fn for_element(element: &Element) -> Option<Self> {
        let action_attribute = element.get_attribute(ACTION_ATTRIBUTE);
        let class_name = element.class_name();
        let classes: Vec<&str> = class_name.split_whitespace().collect();
        Self::resolve(
            action_attribute.as_deref(),
            has_inline_handler(element),
            &classes,
            &dom::text_of(element),
        )
    }

    pub fn run(self, config: &PageConfig, trigger: Option<HtmlElement>) {
        match self {
            Self::Csv => export_csv(config, trigger),
            Self::Print => print_report(config),
            Self::Pdf => export_pdf(config),
            Self::Copy => copy_table(config),
            Self::Share => share_report(config),
        }
    }
}

/// Whether the markup wires the click itself, e.g. `onclick="exportToExcel(this)"`
pub fn has_inline_handler(element: &Element) -> bool {
    element.has_attribute("onclick")
}

pub fn bind_report_buttons(
    document: &Document,
    config: Rc<PageConfig>,
) -> Vec<ListenerHandle> {
    let mut handles = Vec::new();
    for element in dom::query_all(document, &format!(".btn, [{}]", ACTION_ATTRIBUTE)) {
        let Some(action) = ReportAction::for_element(&element) else {
            continue;
        };
        let config = config.clone();
        let trigger = element.dyn_ref::<HtmlElement>().cloned();
        match ListenerHandle::listen(&element, "click", move |event| {
            event.prevent_default();
            action.run(&config, trigger.clone());
        }) {
            Ok(handle) => {
                log::info!("  {:?} button ready", action);
                handles.push(handle);
            }
            Err(err) => log::warn!("Failed to bind {:?} button: {}", action, err),
        }
    }
    handles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_class_and_label() {
        let success = ["btn", "btn-success"];
        assert_eq!(ReportAction::detect(&success, "Excel"), Some(ReportAction::Csv));
        assert_eq!(ReportAction::detect(&success, "WhatsApp"), Some(ReportAction::Share));
        let primary = ["btn", "btn-primary"];
        assert_eq!(ReportAction::detect(&primary, "Print"), Some(ReportAction::Print));
        let danger = ["btn", "btn-danger"];
        assert_eq!(ReportAction::detect(&danger, "PDF"), Some(ReportAction::Pdf));
        let info = ["btn", "btn-info"];
        assert_eq!(ReportAction::detect(&info, "Nakili"), Some(ReportAction::Copy));
        assert_eq!(ReportAction::detect(&info, "Copy"), Some(ReportAction::Copy));
    }

    #[test]
    fn test_inline_onclick_is_not_bound_again() {
        let success = ["btn", "btn-success"];
        assert_eq!(
            ReportAction::resolve(None, false, &success, "Excel"),
            Some(ReportAction::Csv)
        );
        assert_eq!(ReportAction::resolve(None, true, &success, "Excel"), None);
        assert_eq!(ReportAction::resolve(Some("print"), true, &[], "Print"), None);
    }

    #[test]
    fn test_attribute_wins_over_label() {
        let success = ["btn", "btn-success"];
        assert_eq!(
            ReportAction::resolve(Some("copy"), false, &success, "Excel"),
            Some(ReportAction::Copy)
        );
        assert_eq!(ReportAction::resolve(Some("fax"), false, &success, "Excel"), None);
    }

    #[test]
    fn test_detect_requires_matching_class() {
        assert_eq!(ReportAction::detect(&["btn", "btn-danger"], "Excel"), None);
        assert_eq!(ReportAction::detect(&["btn", "btn-danger"], "Futa"), None);
        assert_eq!(ReportAction::detect(&["btn", "btn-primary"], "Hifadhi"), None);
    }

    #[test]
    fn test_from_attribute() {
        assert_eq!(ReportAction::from_attribute("csv"), Some(ReportAction::Csv));
        assert_eq!(ReportAction::from_attribute(" WhatsApp "), Some(ReportAction::Share));
        assert_eq!(ReportAction::from_attribute("fax"), None);
    }
}
