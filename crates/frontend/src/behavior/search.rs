//! Search-as-you-type filtering of card tables.
//!
//! Rows are hidden with an inline `display: none`, which is exactly what the
//! report actions treat as "not visible".

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::bindings::ListenerHandle;
use crate::shared::dom;

pub fn row_matches(row_text: &str, query: &str) -> bool {
    query.is_empty() || row_text.to_lowercase().contains(&query.to_lowercase())
}

/// Shows matching body rows of `table` and hides the rest.
/// Returns the number left visible.
pub fn filter_rows(table: &Element, query: &str) -> usize {
    let mut visible = 0;
    for row in dom::query_all_in(table, "tbody tr") {
        let Some(row) = row.dyn_ref::<web_sys::HtmlElement>() else {
            continue;
        };
        if row_matches(&row.text_content().unwrap_or_default(), query) {
            dom::set_display(row, "");
            visible += 1;
        } else {
            dom::set_display(row, "none");
        }
    }
    visible
}

fn card_table(input: &Element) -> Option<Element> {
    input
        .closest(".card")
        .ok()
        .flatten()?
        .query_selector("table")
        .ok()
        .flatten()
}

pub fn bind_table_search(document: &Document) -> Vec<ListenerHandle> {
    let mut handles = Vec::new();
    for element in dom::query_all(document, ".table-search") {
        let Some(table) = card_table(&element) else {
            log::debug!("Search input without a card table, skipped");
            continue;
        };
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };

        for event in ["keyup", "input"] {
            let input_for_filter = input.clone();
            let table = table.clone();
            match ListenerHandle::listen(&input, event, move |_| {
                filter_rows(&table, &input_for_filter.value());
            }) {
                Ok(handle) => handles.push(handle),
                Err(err) => log::warn!("Failed to bind table search: {}", err),
            }
        }
    }
    handles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_matches_case_insensitive() {
        let rows = ["Sugar 50kg", "Rice 25kg"];
        let visible: Vec<&str> = rows.iter().copied().filter(|r| row_matches(r, "sugar")).collect();
        assert_eq!(visible, vec!["Sugar 50kg"]);
        assert!(row_matches("Sugar 50kg", "SUGAR"));
    }

    #[test]
    fn test_empty_query_shows_everything() {
        assert!(row_matches("Sugar 50kg", ""));
        assert!(row_matches("", ""));
    }

    #[test]
    fn test_substring_across_cells() {
        assert!(row_matches("Rice 25kg\n  Arusha", "25kg"));
        assert!(!row_matches("Rice 25kg", "50kg"));
    }
}
