use serde::{Deserialize, Serialize};

/// Reorder level the server falls back to when a product has none configured.
pub const DEFAULT_REORDER_LEVEL: i64 = 10;

/// Stock status reported by `GET /api/product-stock/{id}/`.
///
/// Unknown status strings are read as `Normal`, so a newer server can add
/// states without breaking the lookup panel.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Low,
    Out,
    #[default]
    #[serde(other)]
    Normal,
}

impl StockStatus {
    /// Server-side status rule: nothing left is `Out`, at or under the
    /// reorder level is `Low`.
    pub fn classify(stock: i64, reorder_level: i64) -> Self {
        if stock <= 0 {
            StockStatus::Out
        } else if stock <= reorder_level {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }
}

/// Body of the product stock lookup response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProductStockResponse {
    /// Echo of the requested product; older servers omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    pub stock: i64,
    pub status: StockStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(StockStatus::classify(0, DEFAULT_REORDER_LEVEL), StockStatus::Out);
        assert_eq!(StockStatus::classify(-3, DEFAULT_REORDER_LEVEL), StockStatus::Out);
        assert_eq!(StockStatus::classify(10, DEFAULT_REORDER_LEVEL), StockStatus::Low);
        assert_eq!(StockStatus::classify(11, DEFAULT_REORDER_LEVEL), StockStatus::Normal);
        assert_eq!(StockStatus::classify(25, 30), StockStatus::Low);
    }

    #[test]
    fn test_parse_response() {
        let low: ProductStockResponse =
            serde_json::from_str(r#"{"stock": 4, "status": "low"}"#).unwrap();
        assert_eq!(low.stock, 4);
        assert_eq!(low.status, StockStatus::Low);

        let out: ProductStockResponse =
            serde_json::from_str(r#"{"stock": 0, "status": "out", "name": "Sugar"}"#).unwrap();
        assert_eq!(out.status, StockStatus::Out);
    }

    #[test]
    fn test_product_id_is_optional() {
        let with_id: ProductStockResponse =
            serde_json::from_str(r#"{"product_id": 7, "stock": 12, "status": "ok"}"#).unwrap();
        assert_eq!(with_id.product_id, Some(7));
        assert_eq!(with_id.stock, 12);

        let without_id: ProductStockResponse =
            serde_json::from_str(r#"{"stock": 12, "status": "ok"}"#).unwrap();
        assert_eq!(without_id.product_id, None);
        assert_eq!(
            serde_json::to_string(&without_id).unwrap(),
            r#"{"stock":12,"status":"normal"}"#
        );
    }

    #[test]
    fn test_unknown_status_is_normal() {
        let resp: ProductStockResponse =
            serde_json::from_str(r#"{"stock": 120, "status": "ok"}"#).unwrap();
        assert_eq!(resp.status, StockStatus::Normal);
    }

    #[test]
    fn test_missing_stock_is_rejected() {
        let resp: Result<ProductStockResponse, _> =
            serde_json::from_str(r#"{"status": "low"}"#);
        assert!(resp.is_err());
    }
}
