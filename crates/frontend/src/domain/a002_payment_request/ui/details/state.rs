//! Approve/reject workflow of a single payment request

use crate::shared::notice::Notice;
use contracts::domain::a002_payment_request::{
    validate_rejection_reason, PaymentStatus, ReviewAction,
};
use contracts::domain::common::{ActionError, PreconditionError};

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewState {
    pub status: PaymentStatus,
    /// Decision currently being sent; at most one per request
    pub in_flight: Option<ReviewAction>,
    /// Opened while an earlier view's decision for this request is still pending
    pub pending_elsewhere: bool,
    pub reason: String,
    pub notice: Option<Notice>,
}

impl ReviewState {
    pub fn new(status: PaymentStatus) -> Self {
        Self {
            status,
            in_flight: None,
            pending_elsewhere: false,
            reason: String::new(),
            notice: None,
        }
    }

    /// Lock the actions while a decision sent from another view is pending
    pub fn with_pending_request(mut self, pending: bool) -> Self {
        self.pending_elsewhere = pending;
        if pending {
            self.notice = Some(Notice::Error(PreconditionError::InFlight.to_string()));
        }
        self
    }

    /// Approve and reject are offered only while the request is submitted
    pub fn actions_available(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some() || self.pending_elsewhere
    }

    pub fn set_reason(&mut self, reason: String) {
        self.reason = reason;
    }

    pub fn approve(&mut self) -> Result<ReviewAction, ActionError> {
        self.begin(ReviewAction::Approve)
    }

    /// Fails locally when the trimmed reason is empty
    pub fn reject(&mut self) -> Result<ReviewAction, ActionError> {
        if self.is_busy() {
            return Err(PreconditionError::InFlight.into());
        }
        match validate_rejection_reason(&self.reason) {
            Ok(reason) => self.begin(ReviewAction::Reject { reason }),
            Err(e) => {
                let err = ActionError::from(e);
                self.notice = Some(Notice::Error(err.to_string()));
                Err(err)
            }
        }
    }

    fn begin(&mut self, action: ReviewAction) -> Result<ReviewAction, ActionError> {
        if self.is_busy() {
            return Err(PreconditionError::InFlight.into());
        }
        if self.status.is_terminal() {
            let err = ActionError::from(PreconditionError::TerminalStatus(
                self.status.code().to_string(),
            ));
            self.notice = Some(Notice::Error(err.to_string()));
            return Err(err);
        }
        self.notice = None;
        self.in_flight = Some(action.clone());
        Ok(action)
    }

    pub fn succeeded(&mut self, action: &ReviewAction) {
        self.status = action.resulting_status();
        self.in_flight = None;
        let text = match action {
            ReviewAction::Approve => "Payment approved successfully!",
            ReviewAction::Reject { .. } => "Payment rejected successfully!",
        };
        self.notice = Some(Notice::Success(text.to_string()));
    }

    pub fn failed(&mut self, err: &ActionError) {
        self.in_flight = None;
        self.notice = Some(Notice::Error(err.to_string()));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn approve_label(&self) -> &'static str {
        match self.in_flight {
            Some(ReviewAction::Approve) => "Approving...",
            _ => "Approve Payment",
        }
    }

    pub fn reject_label(&self) -> &'static str {
        match self.in_flight {
            Some(ReviewAction::Reject { .. }) => "Rejecting...",
            _ => "Reject Payment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ValidationError;

    #[test]
    fn test_blank_reason_is_rejected_locally() {
        let mut review = ReviewState::new(PaymentStatus::Submitted);
        review.set_reason("   \t".into());
        assert_eq!(
            review.reject(),
            Err(ActionError::Validation(ValidationError::EmptyRejectionReason))
        );
        assert!(!review.is_busy());
        assert_eq!(
            review.notice,
            Some(Notice::Error("Please provide a rejection reason".into()))
        );
    }

    #[test]
    fn test_reject_sends_trimmed_reason() {
        let mut review = ReviewState::new(PaymentStatus::Submitted);
        review.set_reason("  proof is unreadable ".into());
        assert_eq!(
            review.reject().unwrap(),
            ReviewAction::Reject {
                reason: "proof is unreadable".into()
            }
        );
        assert_eq!(review.reject_label(), "Rejecting...");
        assert_eq!(review.approve_label(), "Approve Payment");
    }

    #[test]
    fn test_single_in_flight_decision() {
        let mut review = ReviewState::new(PaymentStatus::Submitted);
        review.approve().unwrap();
        assert_eq!(
            review.approve(),
            Err(ActionError::Precondition(PreconditionError::InFlight))
        );
        review.set_reason("late".into());
        assert_eq!(
            review.reject(),
            Err(ActionError::Precondition(PreconditionError::InFlight))
        );
    }

    #[test]
    fn test_success_is_terminal() {
        let mut review = ReviewState::new(PaymentStatus::Submitted);
        let action = review.approve().unwrap();
        review.succeeded(&action);
        assert_eq!(review.status, PaymentStatus::Approved);
        assert!(!review.actions_available());
        assert!(review.approve().is_err());
        assert!(matches!(review.notice, Some(Notice::Error(_))));
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut review = ReviewState::new(PaymentStatus::Submitted);
        let action = review.approve().unwrap();
        review.failed(&ActionError::Server {
            status: 409,
            message: "Already reviewed".into(),
        });
        assert_eq!(review.status, PaymentStatus::Submitted);
        assert!(!review.is_busy());
        assert_eq!(
            review.notice,
            Some(Notice::Error("Server error 409: Already reviewed".into()))
        );
        assert_eq!(review.approve().unwrap(), action);
    }

    #[test]
    fn test_reopened_request_stays_locked() {
        let mut first = ReviewState::new(PaymentStatus::Submitted);
        first.approve().unwrap();

        let mut second =
            ReviewState::new(PaymentStatus::Submitted).with_pending_request(first.is_busy());
        assert!(second.is_busy());
        assert_eq!(
            second.approve(),
            Err(ActionError::Precondition(PreconditionError::InFlight))
        );
        second.set_reason("duplicate".into());
        assert_eq!(
            second.reject(),
            Err(ActionError::Precondition(PreconditionError::InFlight))
        );
        assert!(second.notice.as_ref().map(Notice::is_error).unwrap_or(false));
    }

    #[test]
    fn test_terminal_requests_offer_nothing() {
        for status in [
            PaymentStatus::Approved,
            PaymentStatus::Rejected,
            PaymentStatus::Unknown("refunded".into()),
        ] {
            assert!(!ReviewState::new(status).actions_available());
        }
    }
}
