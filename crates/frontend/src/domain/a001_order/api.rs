//! Orders API

use crate::shared::api_utils::{get_json, put_json, with_query};
use contracts::domain::a001_order::{
    Order, OrderDetailResponse, OrderId, OrderListResponse, OrderStatus, UpdateOrderStatusRequest,
};
use contracts::domain::common::{ActionError, AggregateId, ListQuery};

/// One page of orders, optionally narrowed to a status
pub async fn fetch_orders(query: &ListQuery<OrderStatus>) -> Result<OrderListResponse, ActionError> {
    get_json(&with_query("/orders", query)).await
}

/// Full order record for the detail view
pub async fn fetch_order(id: &OrderId) -> Result<Order, ActionError> {
    let resp: OrderDetailResponse = get_json(&format!("/orders/{}", id.as_str())).await?;
    Ok(resp.order)
}

pub async fn update_order_status(id: &OrderId, status: &OrderStatus) -> Result<(), ActionError> {
    let body = UpdateOrderStatusRequest {
        status: status.clone(),
    };
    put_json(&format!("/orders/{}/status", id.as_str()), &body).await
}
