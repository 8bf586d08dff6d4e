//! Report actions over the page's designated stock table: CSV download,
//! print/PDF, clipboard copy and WhatsApp share.

pub mod buttons;
pub mod csv;
pub mod print;
pub mod share;
pub mod table;
pub mod tsv;

use leptos::task::spawn_local;
use web_sys::HtmlElement;

use crate::config::PageConfig;
use crate::error::ExportError;
use crate::shared::date_utils::now_local;
use crate::shared::{clipboard, dom, export};
use table::{DomTable, ReportSnapshot};

pub use print::{export_pdf, print_report};

pub const REPORT_TITLE: &str = "RIPOTI YA STOCK";

const BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Inaandaa..."#;

const NO_DATA_EXPORT: &str = "Hakuna data ya kuexport!";
const NO_DATA_COPY: &str = "Hakuna data ya kunakili!";
const FAILED_EXPORT: &str = "✗ Kuna tatizo la kupakua faili. Jaribu tena.";
const FAILED_COPY: &str = "✗ Kuna tatizo la kunakili data.";
const FAILED_SHARE: &str = "✗ Kuna tatizo la kushare kwenye WhatsApp.";

/// Shows a spinner on the triggering button while an action runs.
///
/// Label and enabled state are restored on drop, on success and failure alike.
pub struct BusyButton {
    element: HtmlElement,
    label: String,
    was_disabled: bool,
}

impl BusyButton {
    pub fn start(element: HtmlElement) -> Self {
        let label = element.inner_html();
        let was_disabled = dom::is_disabled(&element);
        element.set_inner_html(BUSY_LABEL);
        dom::set_disabled(&element, true);
        Self {
            element,
            label,
            was_disabled,
        }
    }
}

impl Drop for BusyButton {
    fn drop(&mut self) {
        self.element.set_inner_html(&self.label);
        dom::set_disabled(&self.element, self.was_disabled);
    }
}

fn capture(config: &PageConfig) -> Result<ReportSnapshot, ExportError> {
    let document = dom::document().map_err(ExportError::Dom)?;
    let table = DomTable::find(&document, &config.report_table_id)?;
    Ok(ReportSnapshot::capture(&table))
}

fn report_failure(operation: &str, err: &ExportError, no_data: &str, failed: &str) {
    if err.is_precondition() {
        log::info!("{} skipped: {}", operation, err);
        dom::notify(no_data);
    } else {
        log::error!("{} error: {}", operation, err);
        dom::notify(failed);
    }
}

fn download_csv(config: &PageConfig) -> Result<usize, ExportError> {
    let snapshot = capture(config)?;
    let report = csv::build_csv(&snapshot, now_local())?;
    export::download_text(&report.content, &report.filename, export::CSV_MIME)
        .map_err(ExportError::Dom)?;
    log::info!("Downloaded {} ({} rows)", report.filename, report.row_count);
    Ok(report.row_count)
}

/// Downloads the visible rows as CSV. `trigger` is the clicked button, if any.
pub fn export_csv(config: &PageConfig, trigger: Option<HtmlElement>) {
    let busy = trigger.map(BusyButton::start);
    let result = download_csv(config);
    drop(busy);

    match result {
        Ok(count) => dom::notify(&format!("✓ Ripoti imepakuliwa! (Bidhaa: {})", count)),
        Err(err) => report_failure("Excel", &err, NO_DATA_EXPORT, FAILED_EXPORT),
    }
}

/// Copies the visible rows as tab-separated text
pub fn copy_table(config: &PageConfig) {
    let snapshot = match capture(config).and_then(|s| s.ensure_exportable().map(|_| s)) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            report_failure("Copy", &err, NO_DATA_COPY, FAILED_COPY);
            return;
        }
    };

    let text = tsv::build_tsv(&snapshot);
    let count = snapshot.row_count();
    spawn_local(async move {
        match clipboard::write_text(&text).await {
            Ok(()) => dom::notify(&format!("✓ Data imenakiliwa! (Bidhaa: {})", count)),
            Err(err) => {
                let err = ExportError::Clipboard(err);
                report_failure("Copy", &err, NO_DATA_COPY, FAILED_COPY);
            }
        }
    });
}

fn open_share(config: &PageConfig) -> Result<(), ExportError> {
    let window = dom::window().map_err(ExportError::Dom)?;
    // A page without the report table shares a zero count
    let count = match capture(config) {
        Ok(snapshot) => snapshot.row_count(),
        Err(ExportError::TableNotFound(_)) => 0,
        Err(err) => return Err(err),
    };
    let url = share::share_url(&share::build_share_message(count, now_local()));
    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| ExportError::Dom(dom::js_err(e)))?;
    Ok(())
}

/// Opens WhatsApp in a new tab with the report summary pre-filled
pub fn share_report(config: &PageConfig) {
    if let Err(err) = open_share(config) {
        log::error!("WhatsApp error: {}", err);
        dom::notify(FAILED_SHARE);
    }
}
