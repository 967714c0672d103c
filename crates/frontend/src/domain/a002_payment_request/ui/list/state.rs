use crate::shared::list_state::{ListRow, PagedListState};
use crate::shared::list_utils::{contains_ci, Searchable};
use contracts::domain::a002_payment_request::{PaymentRequest, PaymentStatus};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub type PaymentListState = PagedListState<PaymentRequest, PaymentStatus>;

impl ListRow for PaymentRequest {
    fn row_key(&self) -> &str {
        self.id.as_str()
    }
}

impl Searchable for PaymentRequest {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(self.customer_name(), filter)
            || contains_ci(self.id.as_str(), filter)
            || self
                .session_number
                .as_deref()
                .map(|n| contains_ci(n, filter))
                .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentListStats {
    pub total: usize,
    pub submitted: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl PaymentListStats {
    pub fn from_rows(rows: &[PaymentRequest]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, p| {
            acc.total += 1;
            match p.payment_status {
                PaymentStatus::Submitted => acc.submitted += 1,
                PaymentStatus::Approved => acc.approved += 1,
                PaymentStatus::Rejected => acc.rejected += 1,
                PaymentStatus::Unknown(_) => {}
            }
            acc
        })
    }
}

pub const ALL_STATUSES: &str = "all";

pub fn status_filter_from_code(code: &str) -> Option<PaymentStatus> {
    if code.is_empty() || code == ALL_STATUSES {
        None
    } else {
        Some(PaymentStatus::from_code(code))
    }
}

pub fn create_state() -> RwSignal<PaymentListState> {
    RwSignal::new(PaymentListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_state::ListAction;
    use contracts::domain::a002_payment_request::ReviewAction;
    use serde_json::json;

    fn payment(id: &str, name: &str, status: &str) -> PaymentRequest {
        serde_json::from_value(json!({
            "_id": id,
            "sessionNumber": format!("S-{}", id),
            "customerId": { "_id": "c", "fullName": name },
            "paymentStatus": status,
            "totalAmount": 50.0
        }))
        .unwrap()
    }

    fn loaded_state(rows: Vec<PaymentRequest>) -> PaymentListState {
        let mut state = PaymentListState::default();
        let req = state.reduce(ListAction::Reload).unwrap();
        state.reduce(ListAction::Loaded {
            request_id: req.request_id,
            items: rows,
            total_pages: 1,
        });
        state
    }

    #[test]
    fn test_stats_and_search() {
        let mut state = loaded_state(vec![
            payment("p1", "Ada Obi", "submitted"),
            payment("p2", "Bola Ade", "approved"),
            payment("p3", "Chi Eze", "rejected"),
            payment("p4", "Dayo Eko", "Submitted"),
        ]);
        assert_eq!(
            PaymentListStats::from_rows(&state.items),
            PaymentListStats {
                total: 4,
                submitted: 2,
                approved: 1,
                rejected: 1
            }
        );

        state.reduce(ListAction::SetSearch("ADE".into()));
        let visible = state.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "p2");

        state.reduce(ListAction::SetSearch("s-p3".into()));
        assert_eq!(state.visible_items()[0].id.as_str(), "p3");
    }

    #[test]
    fn test_review_patches_row() {
        let mut state = loaded_state(vec![payment("p1", "Ada Obi", "submitted")]);
        let reviewed = state.items[0].reviewed(&ReviewAction::Approve);
        assert!(state.reduce(ListAction::RowUpdated(reviewed)).is_none());
        assert_eq!(state.items[0].payment_status, PaymentStatus::Approved);
    }

    #[test]
    fn test_decision_survives_closed_view() {
        use crate::domain::a002_payment_request::ui::details::state::ReviewState;
        use contracts::domain::common::{ActionError, PreconditionError};

        let mut state = loaded_state(vec![payment("p1", "Ada Obi", "submitted")]);
        let row = state.items[0].clone();

        // first view sends an approval, then is closed before the answer
        let mut first = ReviewState::new(row.payment_status.clone());
        let action = first.approve().unwrap();
        assert!(state.begin_transition("p1"));

        // reopening the same request while it is pending
        let mut second = ReviewState::new(row.payment_status.clone())
            .with_pending_request(state.is_in_flight("p1"));
        assert_eq!(
            second.approve(),
            Err(ActionError::Precondition(PreconditionError::InFlight))
        );
        assert!(!state.begin_transition("p1"));

        // the answer lands after the first view is gone
        state.settle_transition("p1", Some(row.reviewed(&action)));
        assert!(!state.is_in_flight("p1"));
        assert_eq!(state.items[0].payment_status, PaymentStatus::Approved);
        assert!(!ReviewState::new(state.items[0].payment_status.clone()).actions_available());
    }
}
