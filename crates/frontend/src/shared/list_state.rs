//! Reducer for server-paged, status-filtered lists
//!
//! The state is a plain value. `reduce` applies an action and returns the
//! single fetch the caller has to perform, if any. Results carry the request
//! id they answer, so a response to a superseded request is dropped.
//!
//! The list also owns the per-record transition guard: at most one status
//! change or review request per row key, however many detail views open it.

use crate::shared::list_utils::{filter_list, Searchable};
use contracts::domain::common::ListQuery;
use std::collections::HashSet;

/// Row with a stable identity, used to patch a row after a transition
pub trait ListRow: Clone {
    fn row_key(&self) -> &str;
}

/// Fetch the view model has to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest<F> {
    pub request_id: u64,
    pub query: ListQuery<F>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T, F> {
    /// Initial load or manual refresh
    Reload,
    SetStatusFilter(Option<F>),
    SetPage(usize),
    SetSearch(String),
    Loaded {
        request_id: u64,
        items: Vec<T>,
        total_pages: usize,
    },
    LoadFailed {
        request_id: u64,
        error: String,
    },
    /// Replace the row with the same key, if it is on the current page
    RowUpdated(T),
    DismissError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagedListState<T, F> {
    pub items: Vec<T>,
    pub status_filter: Option<F>,
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    pub search: String,
    pub loading: bool,
    pub is_loaded: bool,
    pub error: Option<String>,
    last_request_id: u64,
    pending_request: Option<u64>,
    /// Row keys with a transition request on the wire
    in_flight: HashSet<String>,
}

impl<T, F> Default for PagedListState<T, F> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status_filter: None,
            page: 1,
            total_pages: 1,
            search: String::new(),
            loading: false,
            is_loaded: false,
            error: None,
            last_request_id: 0,
            pending_request: None,
            in_flight: HashSet::new(),
        }
    }
}

impl<T, F> PagedListState<T, F>
where
    T: ListRow,
    F: Clone + PartialEq,
{
    pub fn reduce(&mut self, action: ListAction<T, F>) -> Option<FetchRequest<F>> {
        match action {
            ListAction::Reload => Some(self.begin_fetch()),
            ListAction::SetStatusFilter(filter) => {
                if filter == self.status_filter {
                    return None;
                }
                self.status_filter = filter;
                self.page = 1;
                Some(self.begin_fetch())
            }
            ListAction::SetPage(page) => {
                let page = page.clamp(1, self.total_pages.max(1));
                if page == self.page {
                    return None;
                }
                self.page = page;
                Some(self.begin_fetch())
            }
            ListAction::SetSearch(text) => {
                self.search = text;
                None
            }
            ListAction::Loaded {
                request_id,
                items,
                total_pages,
            } => {
                if !self.is_current(request_id) {
                    log::debug!("dropping stale list response #{}", request_id);
                    return None;
                }
                self.items = items;
                self.total_pages = total_pages.max(1);
                self.finish_fetch();
                self.is_loaded = true;
                self.error = None;
                None
            }
            ListAction::LoadFailed { request_id, error } => {
                if !self.is_current(request_id) {
                    log::debug!("dropping stale list failure #{}", request_id);
                    return None;
                }
                self.finish_fetch();
                self.error = Some(error);
                None
            }
            ListAction::RowUpdated(row) => {
                if let Some(slot) = self.items.iter_mut().find(|r| r.row_key() == row.row_key()) {
                    *slot = row;
                }
                None
            }
            ListAction::DismissError => {
                self.error = None;
                None
            }
        }
    }

    fn begin_fetch(&mut self) -> FetchRequest<F> {
        self.last_request_id += 1;
        self.pending_request = Some(self.last_request_id);
        self.loading = true;
        FetchRequest {
            request_id: self.last_request_id,
            query: ListQuery::new(self.status_filter.clone(), self.page),
        }
    }

    fn finish_fetch(&mut self) {
        self.pending_request = None;
        self.loading = false;
    }

    fn is_current(&self, request_id: u64) -> bool {
        self.pending_request == Some(request_id)
    }

    /// Claim the transition slot of a row; false while one is already pending
    pub fn begin_transition(&mut self, key: &str) -> bool {
        self.in_flight.insert(key.to_string())
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }

    /// Release the slot and patch the row with the confirmed record, if any
    pub fn settle_transition(&mut self, key: &str, confirmed: Option<T>) {
        self.in_flight.remove(key);
        if let Some(row) = confirmed {
            self.reduce(ListAction::RowUpdated(row));
        }
    }
}

impl<T, F> PagedListState<T, F>
where
    T: ListRow + Searchable,
{
    /// Rows of the current page narrowed by the search text
    pub fn visible_items(&self) -> Vec<T> {
        filter_list(&self.items, &self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::contains_ci;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        status: &'static str,
    }

    impl ListRow for Row {
        fn row_key(&self) -> &str {
            self.id
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter) || contains_ci(self.id, filter)
        }
    }

    type State = PagedListState<Row, &'static str>;

    fn loaded(state: &mut State, rows: Vec<Row>, total_pages: usize) {
        let req = state.reduce(ListAction::Reload).unwrap();
        state.reduce(ListAction::Loaded {
            request_id: req.request_id,
            items: rows,
            total_pages,
        });
    }

    #[test]
    fn test_filter_change_resets_page_and_fetches_once() {
        let mut state = State::default();
        loaded(&mut state, vec![], 5);
        assert!(state.reduce(ListAction::SetPage(3)).is_some());
        assert_eq!(state.page, 3);

        let req = state
            .reduce(ListAction::SetStatusFilter(Some("delivered")))
            .unwrap();
        assert_eq!(req.query, ListQuery::new(Some("delivered"), 1));
        assert_eq!(state.page, 1);

        // Same filter again is a no-op
        assert!(state
            .reduce(ListAction::SetStatusFilter(Some("delivered")))
            .is_none());
    }

    #[test]
    fn test_search_never_fetches() {
        let mut state = State::default();
        assert!(state.reduce(ListAction::SetSearch("doe".into())).is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_page_is_clamped() {
        let mut state = State::default();
        loaded(&mut state, vec![], 4);
        let req = state.reduce(ListAction::SetPage(10)).unwrap();
        assert_eq!(req.query.page, 4);
        assert!(state.reduce(ListAction::SetPage(4)).is_none());
        let req = state.reduce(ListAction::SetPage(0)).unwrap();
        assert_eq!(req.query.page, 1);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = State::default();
        let first = state.reduce(ListAction::Reload).unwrap();
        let second = state
            .reduce(ListAction::SetStatusFilter(Some("pending")))
            .unwrap();
        assert!(second.request_id > first.request_id);

        state.reduce(ListAction::Loaded {
            request_id: first.request_id,
            items: vec![Row { id: "old", name: "Old", status: "x" }],
            total_pages: 9,
        });
        assert!(state.items.is_empty());
        assert!(state.loading);

        state.reduce(ListAction::LoadFailed {
            request_id: first.request_id,
            error: "late".into(),
        });
        assert!(state.error.is_none());

        state.reduce(ListAction::Loaded {
            request_id: second.request_id,
            items: vec![Row { id: "new", name: "New", status: "pending" }],
            total_pages: 0,
        });
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total_pages, 1);
        assert!(!state.loading);
    }

    #[test]
    fn test_failure_keeps_rows() {
        let mut state = State::default();
        loaded(&mut state, vec![Row { id: "a1", name: "Jane", status: "pending" }], 1);
        let req = state.reduce(ListAction::Reload).unwrap();
        state.reduce(ListAction::LoadFailed {
            request_id: req.request_id,
            error: "Network error: offline".into(),
        });
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Network error: offline"));
        state.reduce(ListAction::DismissError);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_row_patch_and_search() {
        let mut state = State::default();
        loaded(
            &mut state,
            vec![
                Row { id: "a1", name: "Jane Doe", status: "pending" },
                Row { id: "b2", name: "John Roe", status: "delivered" },
            ],
            1,
        );
        state.reduce(ListAction::RowUpdated(Row {
            id: "a1",
            name: "Jane Doe",
            status: "shipped",
        }));
        assert_eq!(state.items[0].status, "shipped");

        state.reduce(ListAction::SetSearch("DOE".into()));
        let visible = state.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a1");

        state.reduce(ListAction::SetSearch("b2".into()));
        assert_eq!(state.visible_items()[0].id, "b2");
    }

    #[test]
    fn test_one_transition_per_row() {
        let mut state = State::default();
        loaded(&mut state, vec![Row { id: "a1", name: "Jane", status: "pending" }], 1);

        assert!(state.begin_transition("a1"));
        assert!(!state.begin_transition("a1"));
        assert!(state.begin_transition("b2"));

        // a reload while the request is pending keeps the claim
        let req = state.reduce(ListAction::Reload).unwrap();
        state.reduce(ListAction::Loaded {
            request_id: req.request_id,
            items: vec![Row { id: "a1", name: "Jane", status: "pending" }],
            total_pages: 1,
        });
        assert!(state.is_in_flight("a1"));

        state.settle_transition("a1", Some(Row { id: "a1", name: "Jane", status: "shipped" }));
        assert!(!state.is_in_flight("a1"));
        assert_eq!(state.items[0].status, "shipped");

        state.settle_transition("b2", None);
        assert!(state.begin_transition("b2"));
    }
}
