use serde::Deserialize;
use web_sys::Document;

/// Id of the optional inline config block:
/// `<script type="application/toml" id="stock-behavior-config">`.
pub const CONFIG_ELEMENT_ID: &str = "stock-behavior-config";

/// Page behavior settings. Every key is optional in the TOML override.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Table read by the export, copy and share actions
    pub report_table_id: String,
    /// Prefix for API requests; empty means same origin
    pub api_base: String,
    /// Only this path auto-refreshes
    pub refresh_path: String,
    pub refresh_interval_ms: u32,
    pub print_restore_delay_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            report_table_id: "stockTable".to_string(),
            api_base: String::new(),
            refresh_path: "/".to_string(),
            refresh_interval_ms: 30_000,
            print_restore_delay_ms: 1_000,
        }
    }
}

impl PageConfig {
    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("Invalid page config: {}", e))
    }

    /// Reads the inline override block if the page carries one.
    ///
    /// Search order:
    /// 1. `#stock-behavior-config` in the document
    /// 2. Falls back to built-in defaults
    pub fn load(document: &Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            log::debug!("No inline page config, using defaults");
            return Self::default();
        };
        let text = element.text_content().unwrap_or_default();
        match Self::from_toml(&text) {
            Ok(config) => {
                log::info!("Loaded page config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(err) => {
                log::warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }
}
