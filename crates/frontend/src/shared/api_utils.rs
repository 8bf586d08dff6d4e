//! URL helpers for the stock-management server API

/// Joins the configured API base with an absolute API path.
///
/// An empty base keeps the request on the page's own origin.
///
/// # Example
/// ```rust
/// use stock_frontend::shared::api_utils::api_url;
///
/// let url = api_url("https://stock.example.com/", "/api/product-stock/7/");
/// assert_eq!(url, "https://stock.example.com/api/product-stock/7/");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Path of the product stock lookup endpoint
pub fn product_stock_path(product_id: &str) -> String {
    format!("/api/product-stock/{}/", urlencoding::encode(product_id))
}
