use crate::domain::a001_order::OrderItem;
use crate::domain::common::wire::{null_as_default, string_or_number};
use crate::domain::common::{AggregateId, StatusTone, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Payment request id (`_id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentRequestId(pub String);

impl fmt::Display for PaymentRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AggregateId for PaymentRequestId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Review state of a payment request.
///
/// Only `Submitted` accepts a review; everything else, including values
/// this console does not recognise, is final.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Submitted,
    Approved,
    Rejected,
    Unknown(String),
}

impl PaymentStatus {
    pub fn code(&self) -> &str {
        match self {
            PaymentStatus::Submitted => "submitted",
            PaymentStatus::Approved => "approved",
            PaymentStatus::Rejected => "rejected",
            PaymentStatus::Unknown(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            PaymentStatus::Submitted => "Submitted",
            PaymentStatus::Approved => "Approved",
            PaymentStatus::Rejected => "Rejected",
            PaymentStatus::Unknown(raw) => raw,
        }
    }

    pub fn all() -> Vec<PaymentStatus> {
        vec![
            PaymentStatus::Submitted,
            PaymentStatus::Approved,
            PaymentStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "submitted" => PaymentStatus::Submitted,
            "approved" => PaymentStatus::Approved,
            "rejected" => PaymentStatus::Rejected,
            _ => PaymentStatus::Unknown(code.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, PaymentStatus::Submitted)
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            PaymentStatus::Submitted => StatusTone::Warning,
            PaymentStatus::Approved => StatusTone::Success,
            PaymentStatus::Rejected => StatusTone::Error,
            PaymentStatus::Unknown(_) => StatusTone::Neutral,
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Submitted
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for PaymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|r| PaymentStatus::from_code(&r)).unwrap_or_default())
    }
}

/// Review decision on a submitted payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject { reason: String },
}

impl ReviewAction {
    /// Status the request ends up in once the backend accepts the decision
    pub fn resulting_status(&self) -> PaymentStatus {
        match self {
            ReviewAction::Approve => PaymentStatus::Approved,
            ReviewAction::Reject { .. } => PaymentStatus::Rejected,
        }
    }

    /// Progress label shown while the request is in flight
    pub fn progress_label(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "Approving...",
            ReviewAction::Reject { .. } => "Rejecting...",
        }
    }
}

/// Trimmed rejection reason, or a validation error when nothing is left
pub fn validate_rejection_reason(raw: &str) -> Result<String, ValidationError> {
    let reason = raw.trim();
    if reason.is_empty() {
        return Err(ValidationError::EmptyRejectionReason);
    }
    Ok(reason.to_string())
}

/// Customer summary populated on a payment request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerSummary {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerRef {
    Summary(CustomerSummary),
    Id(String),
}

impl CustomerRef {
    /// Name for display and search; empty when only an id is known
    pub fn full_name(&self) -> &str {
        match self {
            CustomerRef::Summary(c) => &c.full_name,
            CustomerRef::Id(_) => "",
        }
    }

    pub fn summary(&self) -> Option<&CustomerSummary> {
        match self {
            CustomerRef::Summary(c) => Some(c),
            CustomerRef::Id(_) => None,
        }
    }
}

/// Payment session submitted by a buyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(rename = "_id")]
    pub id: PaymentRequestId,
    #[serde(default, deserialize_with = "string_or_number")]
    pub session_number: Option<String>,
    #[serde(rename = "customerId")]
    pub customer: Option<CustomerRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub payment_proof: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PaymentRequest {
    pub fn customer_name(&self) -> &str {
        self.customer.as_ref().map(CustomerRef::full_name).unwrap_or("")
    }

    /// Session number, falling back to the short id
    pub fn session_label(&self) -> String {
        match &self.session_number {
            Some(n) if !n.is_empty() => n.clone(),
            _ => self.id.short().to_string(),
        }
    }

    /// Copy reflecting an accepted review decision
    pub fn reviewed(&self, action: &ReviewAction) -> Self {
        let mut next = self.clone();
        next.payment_status = action.resulting_status();
        if let ReviewAction::Reject { reason } = action {
            next.notes = Some(reason.clone());
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(status: &str) -> PaymentRequest {
        serde_json::from_value(json!({
            "_id": "7f00aa11bb22cc33",
            "sessionNumber": 1042,
            "customerId": { "_id": "c1", "fullName": "John Roe", "email": "john@example.com" },
            "totalAmount": 120.0,
            "paymentStatus": status,
            "paymentProof": "https://cdn.example.com/proof.jpg"
        }))
        .unwrap()
    }

    #[test]
    fn test_reason_validation() {
        assert_eq!(
            validate_rejection_reason("   "),
            Err(ValidationError::EmptyRejectionReason)
        );
        assert_eq!(
            validate_rejection_reason("  blurry proof \n").unwrap(),
            "blurry proof"
        );
    }

    #[test]
    fn test_only_submitted_is_reviewable() {
        assert!(!sample("submitted").payment_status.is_terminal());
        assert!(sample("approved").payment_status.is_terminal());
        assert!(sample("rejected").payment_status.is_terminal());
        assert!(sample("archived").payment_status.is_terminal());
        assert_eq!(sample("Approved").payment_status.code(), "approved");
    }

    #[test]
    fn test_deserialize_and_review() {
        let req = sample("submitted");
        assert_eq!(req.session_label(), "1042");
        assert_eq!(req.customer_name(), "John Roe");

        let rejected = req.reviewed(&ReviewAction::Reject {
            reason: "amount mismatch".into(),
        });
        assert_eq!(rejected.payment_status, PaymentStatus::Rejected);
        assert_eq!(rejected.notes.as_deref(), Some("amount mismatch"));
        assert!(rejected.payment_status.is_terminal());

        let approved = req.reviewed(&ReviewAction::Approve);
        assert_eq!(approved.payment_status, PaymentStatus::Approved);
    }

    #[test]
    fn test_customer_as_bare_id() {
        let req: PaymentRequest = serde_json::from_value(json!({
            "_id": "abc",
            "customerId": "c-77",
            "paymentStatus": "submitted"
        }))
        .unwrap();
        assert_eq!(req.customer, Some(CustomerRef::Id("c-77".into())));
        assert_eq!(req.customer_name(), "");
        assert_eq!(req.session_label(), "abc");
    }
}
