//! Status editor of the order detail view

use crate::shared::notice::Notice;
use contracts::domain::a001_order::OrderStatus;
use contracts::domain::common::{ActionError, PreconditionError};

#[derive(Debug, Clone, PartialEq)]
pub struct StatusEditor {
    pub current: OrderStatus,
    pub selected: OrderStatus,
    pub in_flight: bool,
    pub notice: Option<Notice>,
}

impl StatusEditor {
    pub fn new(current: OrderStatus) -> Self {
        Self {
            selected: current.clone(),
            current,
            in_flight: false,
            notice: None,
        }
    }

    /// Block submits while a change sent from another view is pending
    pub fn with_pending_request(mut self, pending: bool) -> Self {
        if pending {
            self.in_flight = true;
            self.notice = Some(Notice::Error(PreconditionError::InFlight.to_string()));
        }
        self
    }

    /// Statuses offered in the select; empty hides the editor
    pub fn options(&self) -> Vec<OrderStatus> {
        self.current.allowed_transitions()
    }

    pub fn is_editable(&self) -> bool {
        !self.current.is_terminal()
    }

    pub fn select(&mut self, status: OrderStatus) {
        self.selected = status;
        self.notice = None;
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.current.check_transition(&self.selected).is_ok()
    }

    /// Status to send, or the reason nothing is sent
    pub fn submit(&mut self) -> Result<OrderStatus, ActionError> {
        if self.in_flight {
            return Err(PreconditionError::InFlight.into());
        }
        if let Err(e) = self.current.check_transition(&self.selected) {
            let err = ActionError::from(e);
            self.notice = Some(Notice::Error(err.to_string()));
            return Err(err);
        }
        self.in_flight = true;
        self.notice = None;
        Ok(self.selected.clone())
    }

    pub fn succeeded(&mut self, status: OrderStatus) {
        self.current = status.clone();
        self.selected = status;
        self.in_flight = false;
        self.notice = Some(Notice::Success("Order status updated successfully".to_string()));
    }

    /// The current status is kept as it was
    pub fn failed(&mut self, err: &ActionError) {
        self.in_flight = false;
        self.notice = Some(Notice::Error(err.to_string()));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Clear `shown` unless a newer notice replaced it
    pub fn expire_notice(&mut self, shown: &Notice) {
        if self.notice.as_ref() == Some(shown) {
            self.notice = None;
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.in_flight {
            "Updating..."
        } else {
            "Update Status"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_order_has_no_editor() {
        for status in [
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Completed,
        ] {
            let editor = StatusEditor::new(status);
            assert!(!editor.is_editable());
            assert!(editor.options().is_empty());
        }
    }

    #[test]
    fn test_same_status_is_rejected_locally() {
        let mut editor = StatusEditor::new(OrderStatus::Processing);
        assert!(!editor.can_submit());
        let err = editor.submit().unwrap_err();
        assert!(err.is_local());
        assert!(!editor.in_flight);
        assert!(editor.notice.as_ref().map(Notice::is_error).unwrap_or(false));

        editor.select(OrderStatus::Shipped);
        assert!(editor.notice.is_none());
        assert!(editor.can_submit());
    }

    #[test]
    fn test_submit_guard_and_success() {
        let mut editor = StatusEditor::new(OrderStatus::Pending);
        editor.select(OrderStatus::Shipped);
        assert_eq!(editor.submit().unwrap(), OrderStatus::Shipped);
        assert_eq!(editor.button_label(), "Updating...");
        assert_eq!(
            editor.submit(),
            Err(ActionError::Precondition(PreconditionError::InFlight))
        );

        editor.succeeded(OrderStatus::Shipped);
        assert_eq!(editor.current, OrderStatus::Shipped);
        assert!(!editor.in_flight);
        let shown = editor.notice.clone().unwrap();
        editor.expire_notice(&shown);
        assert!(editor.notice.is_none());
    }

    #[test]
    fn test_reopened_order_cannot_submit() {
        let mut editor =
            StatusEditor::new(OrderStatus::Pending).with_pending_request(true);
        editor.select(OrderStatus::Shipped);
        assert!(!editor.can_submit());
        assert_eq!(
            editor.submit(),
            Err(ActionError::Precondition(PreconditionError::InFlight))
        );
        assert_eq!(editor.current, OrderStatus::Pending);
    }

    #[test]
    fn test_failure_keeps_current_status() {
        let mut editor = StatusEditor::new(OrderStatus::Pending);
        editor.select(OrderStatus::Cancelled);
        editor.submit().unwrap();
        editor.failed(&ActionError::Network("offline".into()));
        assert_eq!(editor.current, OrderStatus::Pending);
        assert!(!editor.in_flight);
        assert_eq!(
            editor.notice,
            Some(Notice::Error("Network error: offline".into()))
        );
        // Retry is possible after a failure
        assert!(editor.can_submit());
    }
}
