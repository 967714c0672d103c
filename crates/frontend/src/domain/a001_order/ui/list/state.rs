use crate::shared::list_state::{ListRow, PagedListState};
use crate::shared::list_utils::{contains_ci, Searchable};
use contracts::domain::a001_order::{Order, OrderStatus};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub type OrderListState = PagedListState<Order, OrderStatus>;

impl ListRow for Order {
    fn row_key(&self) -> &str {
        self.id.as_str()
    }
}

impl Searchable for Order {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(self.customer_name(), filter) || contains_ci(self.id.as_str(), filter)
    }
}

/// Counters shown above the table, computed over the loaded page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderListStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl OrderListStats {
    pub fn from_rows(rows: &[Order]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, order| {
            acc.total += 1;
            match order.status {
                OrderStatus::Pending => acc.pending += 1,
                OrderStatus::Completed | OrderStatus::Delivered => acc.completed += 1,
                _ => {}
            }
            acc
        })
    }
}

/// Value of the "all statuses" option in the filter select
pub const ALL_STATUSES: &str = "all";

pub fn status_filter_from_code(code: &str) -> Option<OrderStatus> {
    if code.is_empty() || code == ALL_STATUSES {
        None
    } else {
        Some(OrderStatus::from_code(code))
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_state::ListAction;
    use contracts::domain::common::ListQuery;
    use serde_json::json;

    fn order(id: &str, name: &str, status: &str) -> Order {
        serde_json::from_value(json!({
            "_id": id,
            "customerInfo": { "fullName": name },
            "status": status,
            "totalAmount": 10.0
        }))
        .unwrap()
    }

    #[test]
    fn test_search_then_filter_refetch() {
        let mut state = OrderListState::default();
        let req = state.reduce(ListAction::Reload).unwrap();
        state.reduce(ListAction::Loaded {
            request_id: req.request_id,
            items: vec![
                order("a1", "Jane Doe", "pending"),
                order("b2", "John Roe", "delivered"),
            ],
            total_pages: 1,
        });

        state.reduce(ListAction::SetSearch("doe".into()));
        let visible = state.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "a1");

        state.reduce(ListAction::SetSearch(String::new()));
        let req = state
            .reduce(ListAction::SetStatusFilter(status_filter_from_code("delivered")))
            .unwrap();
        assert_eq!(req.query, ListQuery::new(Some(OrderStatus::Delivered), 1));

        state.reduce(ListAction::Loaded {
            request_id: req.request_id,
            items: vec![order("b2", "John Roe", "delivered")],
            total_pages: 1,
        });
        let visible = state.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "b2");
    }

    #[test]
    fn test_stats() {
        let rows = vec![
            order("1", "A", "pending"),
            order("2", "B", "Delivered"),
            order("3", "C", "completed"),
            order("4", "D", "shipped"),
        ];
        assert_eq!(
            OrderListStats::from_rows(&rows),
            OrderListStats {
                total: 4,
                pending: 1,
                completed: 2
            }
        );
    }

    #[test]
    fn test_status_filter_codes() {
        assert_eq!(status_filter_from_code(ALL_STATUSES), None);
        assert_eq!(status_filter_from_code(""), None);
        assert_eq!(
            status_filter_from_code("shipped"),
            Some(OrderStatus::Shipped)
        );
    }
}
