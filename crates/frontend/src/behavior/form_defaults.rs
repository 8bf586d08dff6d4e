//! Default values for entry forms
use chrono::{NaiveDate, NaiveDateTime};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::shared::dom;

pub const REFERENCE_INPUT_ID: &str = "id_reference_no";

/// Value format of `<input type="datetime-local">`, minute precision
pub fn datetime_local_value(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%dT%H:%M").to_string()
}

/// `REF-YYYYMMDD-NNN`; the suffix is reduced modulo 1000.
pub fn reference_number(date: NaiveDate, suffix: u32) -> String {
    format!("REF-{}-{:03}", date.format("%Y%m%d"), suffix % 1000)
}

/// Uniform in 0..=999. Uniqueness is the server's job.
pub fn random_suffix() -> u32 {
    ((js_sys::Math::random() * 1000.0).floor() as u32).min(999)
}

/// Fills every empty datetime-local input with `now`.
/// Returns how many inputs were filled.
pub fn default_datetime_inputs(document: &Document, now: NaiveDateTime) -> usize {
    let value = datetime_local_value(now);
    let mut filled = 0;
    for element in dom::query_all(document, r#"input[type="datetime-local"]"#) {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        if input.value().is_empty() {
            input.set_value(&value);
            filled += 1;
        }
    }
    filled
}

/// Generates a reference number when the form has an empty reference field
pub fn fill_reference_number(document: &Document, today: NaiveDate) -> Option<String> {
    let input = document
        .get_element_by_id(REFERENCE_INPUT_ID)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    if !input.value().is_empty() {
        return None;
    }
    let reference = reference_number(today, random_suffix());
    input.set_value(&reference);
    log::debug!("Generated reference {}", reference);
    Some(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_reference(value: &str) -> bool {
        let parts: Vec<&str> = value.split('-').collect();
        parts.len() == 3
            && parts[0] == "REF"
            && parts[1].len() == 8
            && parts[1].chars().all(|c| c.is_ascii_digit())
            && parts[2].len() == 3
            && parts[2].chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn test_reference_number_format() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(reference_number(date, 7), "REF-20261019-007");
        assert_eq!(reference_number(date, 0), "REF-20261019-000");
        assert_eq!(reference_number(date, 999), "REF-20261019-999");
        assert_eq!(reference_number(date, 1042), "REF-20261019-042");
        for suffix in [0, 5, 57, 999, 1000, 123_456] {
            assert!(is_reference(&reference_number(date, suffix)));
        }
    }

    #[test]
    fn test_datetime_local_value() {
        let now = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(8, 4, 59)
            .unwrap();
        assert_eq!(datetime_local_value(now), "2026-01-02T08:04");
    }
}
