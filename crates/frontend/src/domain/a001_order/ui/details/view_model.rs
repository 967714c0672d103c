//! ViewModel for the order detail view

use super::state::StatusEditor;
use crate::domain::a001_order::api::update_order_status;
use crate::shared::notice::{run_after, Notice};
use crate::shared::row_transition::RowTransitions;
use contracts::domain::a001_order::{Order, OrderStatus};
use contracts::domain::common::{AggregateId, PreconditionError};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Success notices fade after this many milliseconds
const NOTICE_TTL_MS: u32 = 3000;

#[derive(Clone, Copy)]
pub struct OrderDetailsVm {
    pub order: RwSignal<Order>,
    pub editor: RwSignal<StatusEditor>,
    /// Wire code bound to the status select
    pub selected_code: RwSignal<String>,
    transitions: RowTransitions<Order>,
}

impl OrderDetailsVm {
    /// `pending` is set when the list already has a change on the wire for this order
    pub fn new(order: Order, pending: bool, transitions: RowTransitions<Order>) -> Self {
        let editor = StatusEditor::new(order.status.clone()).with_pending_request(pending);
        Self {
            selected_code: RwSignal::new(order.status.code().to_string()),
            editor: RwSignal::new(editor),
            order: RwSignal::new(order),
            transitions,
        }
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let editor = self.editor;
        Signal::derive(move || editor.with(StatusEditor::can_submit))
    }

    pub fn notice(&self) -> Signal<Option<Notice>> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.notice.clone()))
    }

    /// Mirror the select into the editor
    pub fn select_code(&self, code: &str) {
        let status = OrderStatus::from_code(code);
        if self.editor.with_untracked(|e| e.selected != status) {
            self.editor.update(|e| e.select(status));
        }
    }

    pub fn submit(&self) {
        let vm = *self;
        let Some(Ok(target)) = vm.editor.try_update(|e| e.submit()) else {
            return;
        };
        // the outcome is computed up front so the list can apply it after this view is gone
        let (id, updated) = vm
            .order
            .with_untracked(|o| (o.id.clone(), o.with_status(target.clone())));
        let key = id.as_str().to_string();

        if !vm.transitions.begin.try_run(key.clone()).unwrap_or(false) {
            vm.editor
                .update(|e| e.failed(&PreconditionError::InFlight.into()));
            return;
        }
        log::info!("updating order {} to {}", id, target);

        spawn_local(async move {
            match update_order_status(&id, &target).await {
                Ok(()) => {
                    let open = vm.editor.try_update(|e| e.succeeded(target)).is_some();
                    vm.order.try_set(updated.clone());
                    vm.transitions.settle.try_run((key, Some(updated), open));

                    if let Some(shown) = vm.editor.try_with_untracked(|e| e.notice.clone()).flatten() {
                        run_after(NOTICE_TTL_MS, move || {
                            vm.editor.try_update(|e| e.expire_notice(&shown));
                        });
                    }
                }
                Err(e) => {
                    log::warn!("failed to update order {}: {}", id, e);
                    let open = vm.editor.try_update(|ed| ed.failed(&e)).is_some();
                    vm.transitions.settle.try_run((key, None, open));
                }
            }
        });
    }
}
