//! Presentation rules and light interactivity applied to every page.

pub mod auto_refresh;
pub mod delete_confirm;
pub mod form_defaults;
pub mod print_buttons;
pub mod search;
pub mod stock_level;
pub mod stock_lookup;
pub mod tooltips;
