use super::aggregate::{Order, OrderStatus};
use crate::domain::common::wire::null_as_default;
use serde::{Deserialize, Serialize};

/// One page of `GET /orders`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub total_pages: Option<usize>,
}

impl OrderListResponse {
    /// Page count reported by the backend, at least one
    pub fn total_pages(&self) -> usize {
        self.total_pages.unwrap_or(1).max(1)
    }
}

/// `GET /orders/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDetailResponse {
    pub order: Order,
}

/// Body of `PUT /orders/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}
