//! The "visible rows" query shared by every report action.
//!
//! CSV export, clipboard copy and share text all read the report table
//! through [`visible_rows`], so rows hidden by the search filter are
//! excluded everywhere the same way.

use web_sys::{Document, Element};

use crate::error::ExportError;
use crate::shared::dom;

/// One body row as the table currently holds it
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    pub cells: Vec<String>,
    pub hidden: bool,
}

/// Cell texts of one visible row, trimmed, at most one per header
#[derive(Debug, Clone, PartialEq)]
pub struct RowData {
    pub cells: Vec<String>,
}

/// Read access to a table with a header row and body rows
pub trait TableSource {
    fn header_cells(&self) -> Vec<String>;
    fn body_rows(&self) -> Vec<BodyRow>;
}

pub fn visible_rows(source: &impl TableSource) -> Vec<RowData> {
    let width = source.header_cells().len();
    source
        .body_rows()
        .into_iter()
        .filter(|row| !row.hidden)
        .map(|row| RowData {
            cells: row
                .cells
                .iter()
                .take(width)
                .map(|cell| cell.trim().to_string())
                .collect(),
        })
        .collect()
}

/// Headers plus visible rows, read once per report action
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSnapshot {
    pub headers: Vec<String>,
    pub rows: Vec<RowData>,
}

impl ReportSnapshot {
    pub fn capture(source: &impl TableSource) -> Self {
        Self {
            headers: source
                .header_cells()
                .iter()
                .map(|h| h.trim().to_string())
                .collect(),
            rows: visible_rows(source),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Fails when there is nothing an export could meaningfully contain
    pub fn ensure_exportable(&self) -> Result<(), ExportError> {
        if self.headers.is_empty() {
            return Err(ExportError::MissingHeader);
        }
        if self.rows.is_empty() {
            return Err(ExportError::NoVisibleRows);
        }
        Ok(())
    }
}

/// A live `<table>` element in the page
pub struct DomTable {
    element: Element,
}

impl DomTable {
    pub fn find(document: &Document, id: &str) -> Result<Self, ExportError> {
        document
            .get_element_by_id(id)
            .map(|element| Self { element })
            .ok_or_else(|| ExportError::TableNotFound(id.to_string()))
    }
}

impl TableSource for DomTable {
    fn header_cells(&self) -> Vec<String> {
        dom::query_all_in(&self.element, "thead th")
            .iter()
            .map(dom::text_of)
            .collect()
    }

    fn body_rows(&self) -> Vec<BodyRow> {
        dom::query_all_in(&self.element, "tbody tr")
            .iter()
            .map(|row| BodyRow {
                cells: dom::query_all_in(row, "td").iter().map(dom::text_of).collect(),
                hidden: dom::is_hidden(row),
            })
            .collect()
    }
}

/// In-memory table, handy wherever no DOM is around
#[derive(Debug, Clone, Default)]
pub struct StaticTable {
    pub headers: Vec<String>,
    pub rows: Vec<BodyRow>,
}

impl StaticTable {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(BodyRow {
            cells: cells.iter().map(|c| c.to_string()).collect(),
            hidden: false,
        });
        self
    }

    pub fn hidden_row(mut self, cells: &[&str]) -> Self {
        self.rows.push(BodyRow {
            cells: cells.iter().map(|c| c.to_string()).collect(),
            hidden: true,
        });
        self
    }
}

impl TableSource for StaticTable {
    fn header_cells(&self) -> Vec<String> {
        self.headers.clone()
    }

    fn body_rows(&self) -> Vec<BodyRow> {
        self.rows.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_table() -> StaticTable {
        StaticTable::new(&["Bidhaa", "SKU", "Stock"])
            .row(&["  Sugar 50kg ", "SG-50", "120"])
            .hidden_row(&["Rice 25kg", "RC-25", "8"])
            .row(&["Salt", "SL-1", "0", "extra", "cells"])
    }

    #[test]
    fn test_hidden_rows_excluded() {
        let rows = visible_rows(&stock_table());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells, vec!["Sugar 50kg", "SG-50", "120"]);
        assert_eq!(rows[1].cells[0], "Salt");
    }

    #[test]
    fn test_cells_capped_at_header_count() {
        let snapshot = ReportSnapshot::capture(&stock_table());
        assert!(snapshot
            .rows
            .iter()
            .all(|row| row.cells.len() <= snapshot.headers.len()));
        assert_eq!(snapshot.rows[1].cells, vec!["Salt", "SL-1", "0"]);
    }

    #[test]
    fn test_short_rows_kept_as_is() {
        let table = StaticTable::new(&["A", "B", "C"]).row(&["only one"]);
        assert_eq!(visible_rows(&table)[0].cells, vec!["only one"]);
    }

    #[test]
    fn test_ensure_exportable() {
        assert_eq!(ReportSnapshot::capture(&stock_table()).ensure_exportable(), Ok(()));

        let all_hidden = StaticTable::new(&["A"]).hidden_row(&["x"]);
        assert_eq!(
            ReportSnapshot::capture(&all_hidden).ensure_exportable(),
            Err(ExportError::NoVisibleRows)
        );

        let headless = StaticTable::default().row(&["x"]);
        assert_eq!(
            ReportSnapshot::capture(&headless).ensure_exportable(),
            Err(ExportError::MissingHeader)
        );
    }
}
