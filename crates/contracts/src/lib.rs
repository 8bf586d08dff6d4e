//! Wire types shared between the stock-management server and the browser layer.

pub mod stock;
