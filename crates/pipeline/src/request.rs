//! Request payloads carried by the order and shipment channels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderflow_core::{OrderId, ShipmentId};

/// Product used when a shipment trigger carries no product.
pub const UNKNOWN_PRODUCT: &str = "Unknown";

/// One order submission, built fresh by each intake trigger.
///
/// Every listener of a dispatch sees the same, unmodifiable request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    id: OrderId,
    customer_name: String,
    product: String,
    quantity: i64,
    requested_at: DateTime<Utc>,
}

impl OrderRequest {
    /// Build a request; the customer name is trimmed of surrounding whitespace.
    pub fn new(customer_name: &str, product: impl Into<String>, quantity: i64) -> Self {
        Self {
            id: OrderId::new(),
            customer_name: customer_name.trim().to_string(),
            product: product.into(),
            quantity,
            requested_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }

    /// Zero and negative quantities are invalid.
    pub fn has_valid_quantity(&self) -> bool {
        self.quantity > 0
    }
}

/// One shipment request, built fresh by each ship trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    id: ShipmentId,
    product: String,
    express: bool,
    requested_at: DateTime<Utc>,
}

impl ShipmentRequest {
    /// Build a request; a blank product becomes [`UNKNOWN_PRODUCT`], any other
    /// product is kept as given.
    pub fn new(product: &str, express: bool) -> Self {
        let product = if product.trim().is_empty() {
            UNKNOWN_PRODUCT.to_string()
        } else {
            product.to_string()
        };
        Self {
            id: ShipmentId::new(),
            product,
            express,
            requested_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ShipmentId {
        self.id
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn express(&self) -> bool {
        self.express
    }

    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_trims_customer_name() {
        let req = OrderRequest::new("  Alice \t", "Laptop", 2);
        assert_eq!(req.customer_name(), "Alice");
        assert_eq!(req.product(), "Laptop");
        assert_eq!(req.quantity(), 2);
    }

    #[test]
    fn quantity_validity_boundary() {
        assert!(OrderRequest::new("a", "Mouse", 1).has_valid_quantity());
        assert!(!OrderRequest::new("a", "Mouse", 0).has_valid_quantity());
        assert!(!OrderRequest::new("a", "Mouse", -3).has_valid_quantity());
    }

    #[test]
    fn blank_shipment_product_becomes_unknown() {
        assert_eq!(ShipmentRequest::new("   ", true).product(), UNKNOWN_PRODUCT);
        assert_eq!(ShipmentRequest::new("Keyboard", false).product(), "Keyboard");
    }

    #[test]
    fn non_blank_shipment_product_is_not_trimmed() {
        assert_eq!(ShipmentRequest::new(" Mouse ", false).product(), " Mouse ");
    }

    #[test]
    fn order_request_serializes_with_snake_case_fields() {
        let req = OrderRequest::new("Alice", "Laptop", 2);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["customer_name"], "Alice");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["id"], req.id().to_string());
    }
}
