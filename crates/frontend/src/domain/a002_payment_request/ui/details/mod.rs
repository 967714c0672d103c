pub mod state;
pub mod view_model;

use self::view_model::PaymentDetailsVm;
use crate::shared::components::table::format_currency;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notice::NoticeBanner;
use crate::shared::row_transition::RowTransitions;
use contracts::domain::a002_payment_request::PaymentRequest;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PaymentRequestDetails(
    payment: PaymentRequest,
    on_close: Callback<()>,
    /// A decision for this request is already pending
    #[prop(optional)]
    pending: bool,
    transitions: RowTransitions<PaymentRequest>,
) -> impl IntoView {
    let vm = PaymentDetailsVm::new(payment, pending, transitions);
    let payment = move || vm.payment.get();
    let busy = Signal::derive(move || vm.review.with(|r| r.is_busy()));

    view! {
        <ModalFrame on_close=on_close modal_class="modal--payment">
            <div class="details-header">
                <div class="details-header__title">
                    <h2>{move || format!("Payment Session {}", vm.payment.with(|p| p.session_label()))}</h2>
                    <StatusBadge
                        tone=Signal::derive(move || vm.review.with(|r| r.status.tone()))
                        label=Signal::derive(move || vm.review.with(|r| r.status.display_name().to_string()))
                    />
                </div>
                <button class="details-header__close" title="Close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>

            <div class="details-body">
                <NoticeBanner
                    notice=Signal::derive(move || vm.review.with(|r| r.notice.clone()))
                    on_dismiss=Callback::new(move |_| vm.review.update(|r| r.dismiss_notice()))
                />

                <div class="details-grid">
                    <Card>
                        <h3 class="details-section__title">"Customer"</h3>
                        {move || {
                            let p = payment();
                            match p.customer.as_ref().and_then(|c| c.summary()).cloned() {
                                Some(c) => view! {
                                    <dl class="details-list">
                                        <dt>"Name"</dt><dd>{c.full_name}</dd>
                                        <dt>"Email"</dt><dd>{c.email}</dd>
                                        <dt>"Phone"</dt><dd>{c.phone}</dd>
                                    </dl>
                                }.into_any(),
                                None => view! { <p class="text-muted">"Customer details unavailable"</p> }.into_any(),
                            }
                        }}
                    </Card>

                    <Card>
                        <h3 class="details-section__title">"Payment"</h3>
                        {move || {
                            let p = payment();
                            view! {
                                <dl class="details-list">
                                    <dt>"Amount"</dt><dd class="details-list__strong">{format_currency(p.total_amount)}</dd>
                                    <dt>"Submitted"</dt><dd>{format_datetime(p.created_at.as_ref())}</dd>
                                    <dt>"Updated"</dt><dd>{format_datetime(p.updated_at.as_ref())}</dd>
                                    {p.notes.filter(|n| !n.is_empty()).map(|n| view! { <dt>"Notes"</dt><dd>{n}</dd> })}
                                </dl>
                            }
                        }}
                    </Card>
                </div>

                {move || payment().payment_proof.filter(|u| !u.is_empty()).map(|url| { let href = url.clone(); view! {
                    <div class="payment-proof">
                        <h3 class="details-section__title">"Payment Proof"</h3>
                        <a href=href target="_blank" rel="noopener noreferrer">
                            <img class="payment-proof__image" src=url alt="Payment proof" />
                        </a>
                    </div>
                }})}

                <h3 class="details-section__title">"Items"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Product"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Qty"</TableHeaderCell>
                            <TableHeaderCell>"Subtotal"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || payment().items.into_iter().map(|item| { let subtotal = item.subtotal(); view! {
                            <TableRow>
                                <TableCell><TableCellLayout truncate=true>{item.product.display_name().to_string()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_currency(item.price)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{item.quantity}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_currency(subtotal)}</TableCellLayout></TableCell>
                            </TableRow>
                        }}).collect_view()}
                    </TableBody>
                </Table>

                <Show when=move || vm.review.with(|r| r.actions_available())>
                    <div class="review-actions">
                        <Label>"Rejection reason"</Label>
                        <Textarea
                            value=vm.reason
                            placeholder="Required when rejecting"
                            attr:rows=3
                        />
                        <Flex gap=FlexGap::Small>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=busy
                                on_click=move |_| vm.approve(on_close)
                            >
                                {move || vm.review.with(|r| r.approve_label())}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=busy
                                on_click=move |_| vm.reject(on_close)
                            >
                                {move || vm.review.with(|r| r.reject_label())}
                            </Button>
                        </Flex>
                    </div>
                </Show>
            </div>
        </ModalFrame>
    }
}
