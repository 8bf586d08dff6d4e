//! Dashboard auto-refresh.
//!
//! The dashboard reloads itself on a fixed interval, but never while an
//! alert banner is on screen.

use gloo_timers::callback::Interval;

use crate::config::PageConfig;
use crate::shared::dom;

pub const ALERT_SELECTOR: &str = ".alert";

pub fn is_refresh_page(pathname: &str, refresh_path: &str) -> bool {
    pathname == refresh_path
}

pub fn should_reload(alert_count: usize) -> bool {
    alert_count == 0
}

/// Starts the reload timer when the current page is the dashboard.
/// Dropping the returned interval cancels it.
pub fn start_auto_refresh(config: &PageConfig) -> Option<Interval> {
    let pathname = dom::window().ok()?.location().pathname().ok()?;
    if !is_refresh_page(&pathname, &config.refresh_path) {
        return None;
    }

    Some(Interval::new(config.refresh_interval_ms, || {
        let Ok(document) = dom::document() else {
            return;
        };
        let alerts = dom::query_all(&document, ALERT_SELECTOR).len();
        if !should_reload(alerts) {
            log::debug!("Auto-refresh deferred: {} alerts on screen", alerts);
            return;
        }
        if let Ok(window) = dom::window() {
            if let Err(err) = window.location().reload() {
                log::error!("Auto-refresh failed: {}", dom::js_err(err));
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dashboard_refreshes() {
        assert!(is_refresh_page("/", "/"));
        assert!(!is_refresh_page("/products/", "/"));
        assert!(!is_refresh_page("/reports/stock/", "/"));
    }

    #[test]
    fn test_alerts_defer_reload() {
        assert!(should_reload(0));
        assert!(!should_reload(1));
        assert!(!should_reload(3));
    }
}
