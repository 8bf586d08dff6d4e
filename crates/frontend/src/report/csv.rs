//! CSV ("Excel") rendering of a report snapshot
use chrono::NaiveDateTime;

use super::table::ReportSnapshot;
use super::REPORT_TITLE;
use crate::error::ExportError;
use crate::shared::date_utils::{format_iso_date, format_local_date};

/// A rendered CSV file ready for download
#[derive(Debug, Clone, PartialEq)]
pub struct CsvReport {
    pub filename: String,
    /// UTF-8 text starting with a BOM so spreadsheet apps pick the encoding
    pub content: String,
    pub row_count: usize,
}

/// Quotes one cell. Commas become semicolons and any whitespace run,
/// line breaks included, becomes a single space.
pub fn escape_field(text: &str) -> String {
    let without_commas = text.replace(',', ";");
    let collapsed = without_commas.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("\"{}\"", collapsed.replace('"', "\"\""))
}

fn csv_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|cell| escape_field(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn report_filename(generated_at: NaiveDateTime) -> String {
    format!("ripoti_stock_{}.csv", format_iso_date(generated_at.date()))
}

pub fn build_csv(
    snapshot: &ReportSnapshot,
    generated_at: NaiveDateTime,
) -> Result<CsvReport, ExportError> {
    snapshot.ensure_exportable()?;

    let row_count = snapshot.row_count();
    let mut lines = Vec::with_capacity(row_count + 5);
    lines.push(csv_line(&snapshot.headers));
    lines.extend(snapshot.rows.iter().map(|row| csv_line(&row.cells)));

    // Summary block after a blank line
    lines.push(String::new());
    lines.push(escape_field(REPORT_TITLE));
    lines.push(escape_field(&format!(
        "Tarehe: {}",
        format_local_date(generated_at.date())
    )));
    lines.push(escape_field(&format!("Jumla: {} bidhaa", row_count)));

    let mut content = String::from('\u{FEFF}');
    content.push_str(&lines.join("\n"));

    Ok(CsvReport {
        filename: report_filename(generated_at),
        content,
        row_count,
    })
}
