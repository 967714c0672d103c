//! Error taxonomy for console actions
//!
//! Validation and precondition failures are raised locally and never reach the
//! network. Network, server and decode failures come back from the API layer
//! and leave the in-memory state untouched.

use thiserror::Error;

/// Invalid user input detected before any request is issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide a rejection reason")]
    EmptyRejectionReason,

    #[error("Current password is required to change the admin email")]
    PasswordRequired,

    #[error("Email address must not be empty")]
    EmptyEmail,
}

/// Action attempted on a record whose state does not allow it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Status \"{0}\" is final, no further changes are allowed")]
    TerminalStatus(String),

    #[error("Status is already \"{0}\"")]
    UnchangedStatus(String),

    #[error("Status \"{0}\" cannot be set manually")]
    NotSelectable(String),

    #[error("A request for this record is already in progress")]
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),
}

impl ActionError {
    /// Build a server error from a non-2xx response body.
    ///
    /// JSON bodies carrying `message` (or `error`) are surfaced verbatim,
    /// anything else falls back to the raw text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                let text = body.trim();
                if text.is_empty() {
                    "request failed".to_string()
                } else {
                    text.chars().take(200).collect()
                }
            });
        ActionError::Server { status, message }
    }

    /// True when the error was produced locally and no request was sent
    pub fn is_local(&self) -> bool {
        matches!(self, ActionError::Validation(_) | ActionError::Precondition(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_uses_message_field() {
        let err = ActionError::from_response(400, r#"{"message":"Order not found"}"#);
        assert_eq!(
            err,
            ActionError::Server {
                status: 400,
                message: "Order not found".to_string()
            }
        );
        assert_eq!(err.to_string(), "Server error 400: Order not found");
    }

    #[test]
    fn test_from_response_plain_text_and_empty() {
        match ActionError::from_response(502, "Bad Gateway") {
            ActionError::Server { message, .. } => assert_eq!(message, "Bad Gateway"),
            other => panic!("unexpected {:?}", other),
        }
        match ActionError::from_response(500, "  ") {
            ActionError::Server { message, .. } => assert_eq!(message, "request failed"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_local_errors() {
        assert!(ActionError::from(ValidationError::EmptyRejectionReason).is_local());
        assert!(ActionError::from(PreconditionError::InFlight).is_local());
        assert!(!ActionError::Network("offline".into()).is_local());
        assert_eq!(
            ActionError::from(ValidationError::EmptyRejectionReason).to_string(),
            "Please provide a rejection reason"
        );
    }
}
