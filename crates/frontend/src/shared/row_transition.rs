//! Wiring between a list page and the detail view that changes one of its rows

use crate::shared::list_state::{ListRow, PagedListState};
use leptos::prelude::*;

/// Callbacks a detail view uses to run a transition through its list.
///
/// Both are owned by the list page, so they stay valid after the detail view
/// that started a request has been closed.
pub struct RowTransitions<T: 'static> {
    /// Claim the row; `false` means a request for it is already pending
    pub begin: Callback<String, bool>,
    /// `(row key, confirmed record, whether the starting view is still open)`
    pub settle: Callback<(String, Option<T>, bool)>,
}

impl<T: 'static> Clone for RowTransitions<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RowTransitions<T> {}

impl<T> RowTransitions<T>
where
    T: ListRow + Send + Sync + 'static,
{
    /// Hooks over the list state and the record shown in the detail view
    pub fn for_list<F>(state: RwSignal<PagedListState<T, F>>, selected: RwSignal<Option<T>>) -> Self
    where
        F: Clone + PartialEq + Send + Sync + 'static,
    {
        let begin = Callback::new(move |key: String| {
            state
                .try_update(|s| s.begin_transition(&key))
                .unwrap_or(false)
        });

        let settle = Callback::new(move |(key, confirmed, origin_open): (String, Option<T>, bool)| {
            if state
                .try_update(|s| s.settle_transition(&key, confirmed.clone()))
                .is_none()
                || origin_open
            {
                return;
            }
            // A view reopened on this row was built as busy; rebuild it from the outcome
            let reopened = selected
                .try_with_untracked(|s| s.as_ref().map(|r| r.row_key() == key))
                .flatten()
                .unwrap_or(false);
            if reopened {
                match confirmed {
                    Some(row) => {
                        selected.try_set(Some(row));
                    }
                    None => {
                        selected.try_update(|_| {});
                    }
                }
            }
        });

        Self { begin, settle }
    }
}
