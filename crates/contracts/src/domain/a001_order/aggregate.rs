use crate::domain::common::wire::null_as_default;
use crate::domain::common::{AggregateId, PreconditionError, StatusTone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Order id as issued by the backend (`_id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AggregateId for OrderId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Fulfilment status of an order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Processing,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    /// Legacy value still returned for old orders
    Completed,
    /// Any value this console does not know about
    Unknown(String),
}

impl OrderStatus {
    /// Statuses an admin can pick in the status editor
    pub const ADMIN_SELECTABLE: [OrderStatus; 4] = [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire code
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Completed => "completed",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Completed => "Completed",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Known statuses, in list filter order
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    /// Case-insensitive parse; unrecognised values are kept as `Unknown`
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "confirmed" => OrderStatus::Confirmed,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            "completed" => OrderStatus::Completed,
            _ => OrderStatus::Unknown(code.to_string()),
        }
    }

    /// Terminal statuses accept no further edits
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Delivered | OrderStatus::Cancelled
        )
    }

    /// Next statuses offered to the admin; empty for terminal orders
    pub fn allowed_transitions(&self) -> Vec<OrderStatus> {
        if self.is_terminal() {
            return Vec::new();
        }
        Self::ADMIN_SELECTABLE.to_vec()
    }

    /// Decide whether `target` may be submitted for an order currently in `self`
    pub fn check_transition(&self, target: &OrderStatus) -> Result<(), PreconditionError> {
        if self.is_terminal() {
            return Err(PreconditionError::TerminalStatus(self.code().to_string()));
        }
        if self == target {
            return Err(PreconditionError::UnchangedStatus(self.code().to_string()));
        }
        if !Self::ADMIN_SELECTABLE.contains(target) {
            return Err(PreconditionError::NotSelectable(target.code().to_string()));
        }
        Ok(())
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OrderStatus::Pending => StatusTone::Error,
            OrderStatus::Processing => StatusTone::Warning,
            OrderStatus::Completed | OrderStatus::Delivered => StatusTone::Success,
            OrderStatus::Cancelled => StatusTone::Muted,
            OrderStatus::Confirmed | OrderStatus::Shipped | OrderStatus::Unknown(_) => {
                StatusTone::Neutral
            }
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|r| OrderStatus::from_code(&r)).unwrap_or_default())
    }
}

/// Payment state of an order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderPaymentStatus {
    Pending,
    Confirmed,
    Failed,
    Unknown(String),
}

impl OrderPaymentStatus {
    pub fn code(&self) -> &str {
        match self {
            OrderPaymentStatus::Pending => "pending",
            OrderPaymentStatus::Confirmed => "confirmed",
            OrderPaymentStatus::Failed => "failed",
            OrderPaymentStatus::Unknown(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            OrderPaymentStatus::Pending => "Pending",
            OrderPaymentStatus::Confirmed => "Confirmed",
            OrderPaymentStatus::Failed => "Failed",
            OrderPaymentStatus::Unknown(raw) => raw,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "pending" => OrderPaymentStatus::Pending,
            "confirmed" => OrderPaymentStatus::Confirmed,
            "failed" => OrderPaymentStatus::Failed,
            _ => OrderPaymentStatus::Unknown(code.to_string()),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OrderPaymentStatus::Confirmed => StatusTone::Success,
            OrderPaymentStatus::Pending => StatusTone::Warning,
            OrderPaymentStatus::Failed => StatusTone::Error,
            OrderPaymentStatus::Unknown(_) => StatusTone::Neutral,
        }
    }
}

impl Default for OrderPaymentStatus {
    fn default() -> Self {
        OrderPaymentStatus::Pending
    }
}

impl Serialize for OrderPaymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for OrderPaymentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|r| OrderPaymentStatus::from_code(&r)).unwrap_or_default())
    }
}

/// Buyer contact block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip_code: String,
}

/// Shipping destination, may differ from the buyer contact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip_code: String,
    pub landmark: Option<String>,
    pub delivery_instructions: Option<String>,
}

/// Populated product on an order line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductSummary {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

/// Product reference: populated summary or bare id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Summary(ProductSummary),
    Id(String),
}

impl Default for ProductRef {
    fn default() -> Self {
        ProductRef::Id(String::new())
    }
}

impl ProductRef {
    pub fn display_name(&self) -> &str {
        match self {
            ProductRef::Summary(p) if !p.product_name.is_empty() => &p.product_name,
            ProductRef::Summary(p) => &p.id,
            ProductRef::Id(id) => id,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            ProductRef::Summary(p) if !p.category.is_empty() => Some(&p.category),
            _ => None,
        }
    }
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub product: ProductRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: u32,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Order as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_info: CustomerInfo,
    #[serde(default)]
    pub delivery_details: Option<DeliveryDetails>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shipping_fee: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: OrderPaymentStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn customer_name(&self) -> &str {
        &self.customer_info.full_name
    }

    /// Number of order lines
    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    /// Copy with the status replaced, used after a confirmed update
    pub fn with_status(&self, status: OrderStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(OrderStatus::from_code("Delivered"), OrderStatus::Delivered);
        assert_eq!(OrderStatus::from_code("SHIPPED"), OrderStatus::Shipped);
        assert_eq!(OrderStatus::from_code("canceled"), OrderStatus::Cancelled);
        assert_eq!(
            OrderStatus::from_code("on_hold"),
            OrderStatus::Unknown("on_hold".to_string())
        );
    }

    #[test]
    fn test_terminal_orders_have_no_transitions() {
        for status in [
            OrderStatus::Completed,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert!(status.is_terminal());
            assert!(status.allowed_transitions().is_empty());
        }
        assert_eq!(
            OrderStatus::Pending.allowed_transitions(),
            OrderStatus::ADMIN_SELECTABLE.to_vec()
        );
        assert!(!OrderStatus::Unknown("x".into()).is_terminal());
    }

    #[test]
    fn test_check_transition() {
        assert!(OrderStatus::Pending
            .check_transition(&OrderStatus::Shipped)
            .is_ok());
        assert_eq!(
            OrderStatus::Processing.check_transition(&OrderStatus::Processing),
            Err(PreconditionError::UnchangedStatus("processing".into()))
        );
        assert_eq!(
            OrderStatus::Delivered.check_transition(&OrderStatus::Shipped),
            Err(PreconditionError::TerminalStatus("delivered".into()))
        );
        assert_eq!(
            OrderStatus::Pending.check_transition(&OrderStatus::Confirmed),
            Err(PreconditionError::NotSelectable("confirmed".into()))
        );
    }

    #[test]
    fn test_tones() {
        assert_eq!(OrderStatus::Pending.tone(), StatusTone::Error);
        assert_eq!(OrderStatus::Processing.tone(), StatusTone::Warning);
        assert_eq!(OrderStatus::Completed.tone(), StatusTone::Success);
        assert_eq!(OrderStatus::Cancelled.tone(), StatusTone::Muted);
        assert_eq!(OrderStatus::Unknown("x".into()).tone(), StatusTone::Neutral);
        assert_eq!(OrderPaymentStatus::Failed.tone(), StatusTone::Error);
    }

    #[test]
    fn test_order_deserialize() {
        let order: Order = serde_json::from_value(json!({
            "_id": "665f1c2a9b1e8a0012ab34cd",
            "customerInfo": { "fullName": "Jane Doe", "email": "jane@example.com", "phone": null },
            "items": [
                { "product": { "_id": "p1", "productName": "Rice 5kg", "category": "Grains" },
                  "brandName": "Mama", "price": 12.5, "quantity": 2 },
                { "product": "p2", "price": 3.0, "quantity": 1 }
            ],
            "totalAmount": 28.0,
            "shippingFee": 0,
            "status": "Pending",
            "paymentStatus": "confirmed",
            "createdAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(order.customer_name(), "Jane Doe");
        assert_eq!(order.customer_info.phone, "");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, OrderPaymentStatus::Confirmed);
        assert_eq!(order.items_count(), 2);
        assert_eq!(order.items[0].product.display_name(), "Rice 5kg");
        assert_eq!(order.items[1].product.display_name(), "p2");
        assert_eq!(order.id.short(), "12ab34cd");
        assert!(order.delivery_details.is_none());
        assert!(!order.status.is_terminal());

        let shipped = order.with_status(OrderStatus::Shipped);
        assert_eq!(shipped.status, OrderStatus::Shipped);
        assert_eq!(shipped.id, order.id);
    }
}
