pub mod api_utils;
pub mod clipboard;
pub mod date_utils;
pub mod dom;
pub mod export;
