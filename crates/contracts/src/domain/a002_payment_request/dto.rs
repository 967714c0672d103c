use super::aggregate::PaymentRequest;
use crate::domain::common::wire::null_as_default;
use serde::{Deserialize, Serialize};

/// One page of `GET /payments/requests`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sessions: Vec<PaymentRequest>,
    #[serde(default)]
    pub total_pages: Option<usize>,
}

impl PaymentListResponse {
    pub fn total_pages(&self) -> usize {
        self.total_pages.unwrap_or(1).max(1)
    }
}

/// Body of `PUT /payments/{id}/reject`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectPaymentRequest {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response() {
        let resp: PaymentListResponse = serde_json::from_value(json!({
            "sessions": [{ "_id": "p1", "paymentStatus": "submitted" }],
            "totalPages": 3
        }))
        .unwrap();
        assert_eq!(resp.sessions.len(), 1);
        assert_eq!(resp.total_pages(), 3);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        use super::super::aggregate::PaymentStatus;

        let resp: PaymentListResponse = serde_json::from_value(json!({
            "sessions": [
                { "_id": "p1", "paymentStatus": null, "totalAmount": null, "items": null },
                { "_id": "p2", "paymentStatus": "approved", "customerId": null }
            ]
        }))
        .unwrap();

        let first = &resp.sessions[0];
        assert_eq!(first.payment_status, PaymentStatus::Submitted);
        assert_eq!(first.total_amount, 0.0);
        assert!(first.items.is_empty());
        assert_eq!(resp.sessions[1].payment_status, PaymentStatus::Approved);
        assert_eq!(resp.sessions[1].customer_name(), "");
    }
}
