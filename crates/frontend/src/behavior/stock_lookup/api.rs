use gloo_net::http::Request;
use stock_contracts::stock::ProductStockResponse;

use crate::shared::api_utils::{api_url, product_stock_path};

/// Current stock of one product.
///
/// Single attempt, no timeout; the caller decides whether the answer is
/// still wanted.
pub async fn fetch_product_stock(
    api_base: &str,
    product_id: &str,
) -> Result<ProductStockResponse, String> {
    let url = api_url(api_base, &product_stock_path(product_id));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch product stock: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
