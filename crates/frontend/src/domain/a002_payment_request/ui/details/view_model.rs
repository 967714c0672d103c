//! ViewModel for the payment request detail view

use super::state::ReviewState;
use crate::domain::a002_payment_request::api::submit_review;
use crate::shared::notice::run_after;
use crate::shared::row_transition::RowTransitions;
use contracts::domain::a002_payment_request::{PaymentRequest, ReviewAction};
use contracts::domain::common::{ActionError, AggregateId, PreconditionError};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The modal closes this long after a successful decision
const CLOSE_DELAY_MS: u32 = 2000;

#[derive(Clone, Copy)]
pub struct PaymentDetailsVm {
    pub payment: RwSignal<PaymentRequest>,
    pub review: RwSignal<ReviewState>,
    /// Bound to the rejection reason textarea
    pub reason: RwSignal<String>,
    transitions: RowTransitions<PaymentRequest>,
}

impl PaymentDetailsVm {
    /// `pending` is set when the list already has a decision on the wire for this request
    pub fn new(
        payment: PaymentRequest,
        pending: bool,
        transitions: RowTransitions<PaymentRequest>,
    ) -> Self {
        let review = ReviewState::new(payment.payment_status.clone()).with_pending_request(pending);
        Self {
            review: RwSignal::new(review),
            payment: RwSignal::new(payment),
            reason: RwSignal::new(String::new()),
            transitions,
        }
    }

    pub fn approve(&self, on_close: Callback<()>) {
        let started = self.review.try_update(|r| r.approve());
        self.run(started, on_close);
    }

    pub fn reject(&self, on_close: Callback<()>) {
        let reason = self.reason.get_untracked();
        let started = self.review.try_update(|r| {
            r.set_reason(reason);
            r.reject()
        });
        self.run(started, on_close);
    }

    /// This view is still mounted
    fn is_open(&self) -> bool {
        self.review.try_with_untracked(|_| ()).is_some()
    }

    fn run(&self, started: Option<Result<ReviewAction, ActionError>>, on_close: Callback<()>) {
        let action = match started {
            Some(Ok(action)) => action,
            Some(Err(e)) => {
                log::debug!("review not sent: {}", e);
                return;
            }
            None => return,
        };
        let vm = *self;
        // the outcome is computed up front so the list can apply it after this view is gone
        let (id, reviewed) = vm
            .payment
            .with_untracked(|p| (p.id.clone(), p.reviewed(&action)));
        let key = id.as_str().to_string();

        if !vm.transitions.begin.try_run(key.clone()).unwrap_or(false) {
            vm.review
                .update(|r| r.failed(&PreconditionError::InFlight.into()));
            return;
        }
        log::info!("{} payment {}", action.progress_label(), id);

        spawn_local(async move {
            match submit_review(&id, &action).await {
                Ok(()) => {
                    let open = vm.review.try_update(|r| r.succeeded(&action)).is_some();
                    vm.payment.try_set(reviewed.clone());
                    vm.transitions.settle.try_run((key, Some(reviewed), open));
                    if open {
                        run_after(CLOSE_DELAY_MS, move || {
                            // closing or switching records in the meantime disposes this view
                            if vm.is_open() {
                                on_close.try_run(());
                            }
                        });
                    }
                }
                Err(e) => {
                    log::warn!("review of payment {} failed: {}", id, e);
                    let open = vm.review.try_update(|r| r.failed(&e)).is_some();
                    vm.transitions.settle.try_run((key, None, open));
                }
            }
        });
    }
}
