//! Colour coding of `.stock-level` cells
use web_sys::Document;

use crate::shared::dom;

/// Highest value shown as blocked
pub const BLOCKED_MAX: i64 = 0;
/// Highest value shown as a warning
pub const WARNING_MAX: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Blocked,
    Warning,
    Healthy,
}

impl StockLevel {
    pub fn classify(stock: i64) -> Self {
        if stock <= BLOCKED_MAX {
            StockLevel::Blocked
        } else if stock <= WARNING_MAX {
            StockLevel::Warning
        } else {
            StockLevel::Healthy
        }
    }

    pub fn css_classes(self) -> &'static [&'static str] {
        match self {
            StockLevel::Blocked => &["text-danger", "fw-bold"],
            StockLevel::Warning => &["text-warning", "fw-bold"],
            StockLevel::Healthy => &["text-success"],
        }
    }

    pub fn icon(self) -> Option<&'static str> {
        match self {
            StockLevel::Blocked => Some(r#"<i class="fas fa-times-circle"></i>"#),
            StockLevel::Warning => Some(r#"<i class="fas fa-exclamation-triangle"></i>"#),
            StockLevel::Healthy => None,
        }
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits.
/// Anything after the digits is ignored ("12 pcs" -> 12).
pub fn parse_stock(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// Replacement markup for a cell, `None` when it keeps its text
pub fn decorated_html(stock: i64) -> Option<String> {
    StockLevel::classify(stock)
        .icon()
        .map(|icon| format!("{} {}", icon, stock))
}

/// Decorates every `.stock-level` element holding a number.
/// Returns how many were decorated.
pub fn apply_stock_levels(document: &Document) -> usize {
    let mut decorated = 0;
    for element in dom::query_all(document, ".stock-level") {
        let Some(stock) = parse_stock(&element.text_content().unwrap_or_default()) else {
            continue;
        };
        let class_list = element.class_list();
        for class in StockLevel::classify(stock).css_classes() {
            let _ = class_list.add_1(class);
        }
        if let Some(html) = decorated_html(stock) {
            element.set_inner_html(&html);
        }
        decorated += 1;
    }
    decorated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(StockLevel::classify(0), StockLevel::Blocked);
        assert_eq!(StockLevel::classify(-5), StockLevel::Blocked);
        assert_eq!(StockLevel::classify(1), StockLevel::Warning);
        assert_eq!(StockLevel::classify(10), StockLevel::Warning);
        assert_eq!(StockLevel::classify(11), StockLevel::Healthy);
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("42"), Some(42));
        assert_eq!(parse_stock("  -5 "), Some(-5));
        assert_eq!(parse_stock("12 pcs"), Some(12));
        assert_eq!(parse_stock("+7"), Some(7));
        assert_eq!(parse_stock("n/a"), None);
        assert_eq!(parse_stock(""), None);
        assert_eq!(parse_stock("-"), None);
    }

    #[test]
    fn test_decorated_html() {
        assert_eq!(
            decorated_html(0).as_deref(),
            Some(r#"<i class="fas fa-times-circle"></i> 0"#)
        );
        assert_eq!(
            decorated_html(10).as_deref(),
            Some(r#"<i class="fas fa-exclamation-triangle"></i> 10"#)
        );
        assert_eq!(decorated_html(11), None);
    }
}
