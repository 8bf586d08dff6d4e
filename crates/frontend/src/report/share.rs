//! WhatsApp share text
use chrono::NaiveDateTime;

use super::REPORT_TITLE;
use crate::shared::date_utils::{format_local_date, format_local_time};

pub const SHARE_ENDPOINT: &str = "https://wa.me/?text=";

pub fn build_share_message(row_count: usize, generated_at: NaiveDateTime) -> String {
    format!(
        "📊 *{}*\n📅 Tarehe: {}\n⏰ Saa: {}\n📦 Bidhaa: {}\n🏢 Stock Management System",
        REPORT_TITLE,
        format_local_date(generated_at.date()),
        format_local_time(generated_at.time()),
        row_count
    )
}

/// Message composition URL with the text pre-filled
pub fn share_url(message: &str) -> String {
    format!("{}{}", SHARE_ENDPOINT, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap()
    }

    #[test]
    fn test_share_message() {
        let message = build_share_message(3, at());
        assert_eq!(
            message,
            concat!(
                "📊 *RIPOTI YA STOCK*\n",
                "📅 Tarehe: 19/10/2026\n",
                "⏰ Saa: 14:30:05\n",
                "📦 Bidhaa: 3\n",
                "🏢 Stock Management System"
            )
        );
    }

    #[test]
    fn test_share_url_is_encoded() {
        let url = share_url(&build_share_message(3, at()));
        assert!(url.starts_with("https://wa.me/?text="));
        let payload = &url[SHARE_ENDPOINT.len()..];
        assert!(!payload.contains(' '));
        assert!(!payload.contains('\n'));
        assert!(payload.contains("%0A"));
        assert_eq!(
            urlencoding::decode(payload).unwrap(),
            build_share_message(3, at())
        );
    }
}
