/// Date and time formatting for report summaries and form defaults
///
/// Reports follow the Tanzanian Swahili locale: day first, slash separated.
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Current wall-clock time in the browser's timezone
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Example: 2026-10-19 -> "19/10/2026"
pub fn format_local_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Example: 09:05:03 -> "09:05:03"
pub fn format_local_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Example: 2026-10-19 -> "2026-10-19"
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
