//! Payment requests API

use crate::shared::api_utils::{get_json, put_empty, put_json, with_query};
use contracts::domain::a002_payment_request::{
    PaymentListResponse, PaymentRequestId, PaymentStatus, RejectPaymentRequest, ReviewAction,
};
use contracts::domain::common::{ActionError, AggregateId, ListQuery};

pub async fn fetch_payment_requests(
    query: &ListQuery<PaymentStatus>,
) -> Result<PaymentListResponse, ActionError> {
    get_json(&with_query("/payments/requests", query)).await
}

pub async fn approve_payment(id: &PaymentRequestId) -> Result<(), ActionError> {
    put_empty(&format!("/payments/{}/approve", id.as_str())).await
}

/// `reason` is sent as given; callers pass the validated, trimmed text
pub async fn reject_payment(id: &PaymentRequestId, reason: &str) -> Result<(), ActionError> {
    let body = RejectPaymentRequest {
        reason: reason.to_string(),
    };
    put_json(&format!("/payments/{}/reject", id.as_str()), &body).await
}

/// Send a review decision
pub async fn submit_review(id: &PaymentRequestId, action: &ReviewAction) -> Result<(), ActionError> {
    match action {
        ReviewAction::Approve => approve_payment(id).await,
        ReviewAction::Reject { reason } => reject_payment(id, reason).await,
    }
}
