pub mod state;
pub mod view_model;

use self::view_model::OrderDetailsVm;
use crate::shared::components::table::format_currency;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notice::NoticeBanner;
use crate::shared::row_transition::RowTransitions;
use contracts::domain::a001_order::{Order, OrderStatus};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

/// Order detail modal with the status editor
#[component]
pub fn OrderDetails(
    order: Order,
    on_close: Callback<()>,
    /// A status change for this order is already pending
    #[prop(optional)]
    pending: bool,
    transitions: RowTransitions<Order>,
) -> impl IntoView {
    let vm = OrderDetailsVm::new(order, pending, transitions);

    Effect::new(move |_| {
        let code = vm.selected_code.get();
        untrack(move || vm.select_code(&code));
    });

    let order = move || vm.order.get();
    let can_submit = vm.can_submit();

    view! {
        <ModalFrame on_close=on_close modal_class="modal--order">
            <div class="details-header">
                <div class="details-header__title">
                    <h2>{move || format!("Order #{}", vm.order.with(|o| o.id.short().to_string()))}</h2>
                    <StatusBadge
                        tone=Signal::derive(move || vm.order.with(|o| o.status.tone()))
                        label=Signal::derive(move || vm.order.with(|o| o.status.display_name().to_string()))
                    />
                </div>
                <button class="details-header__close" title="Close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>

            <div class="details-body">
                <NoticeBanner
                    notice=vm.notice()
                    on_dismiss=Callback::new(move |_| vm.editor.update(|e| e.dismiss_notice()))
                />

                <div class="details-grid">
                    <Card>
                        <h3 class="details-section__title">"Customer"</h3>
                        {move || {
                            let info = order().customer_info;
                            view! {
                                <dl class="details-list">
                                    <dt>"Name"</dt><dd>{info.full_name}</dd>
                                    <dt>"Email"</dt><dd>{info.email}</dd>
                                    <dt>"Phone"</dt><dd>{info.phone}</dd>
                                    <dt>"Address"</dt>
                                    <dd>{format!("{}, {}, {} {}", info.address, info.city, info.state, info.zip_code)}</dd>
                                </dl>
                            }
                        }}
                    </Card>

                    {move || order().delivery_details.map(|d| view! {
                        <Card>
                            <h3 class="details-section__title">"Delivery"</h3>
                            <dl class="details-list">
                                <dt>"Recipient"</dt><dd>{d.full_name}</dd>
                                <dt>"Phone"</dt><dd>{d.phone}</dd>
                                <dt>"Address"</dt>
                                <dd>{format!("{}, {}, {} {}", d.address, d.city, d.state, d.zip_code)}</dd>
                                {d.landmark.map(|l| view! { <dt>"Landmark"</dt><dd>{l}</dd> })}
                                {d.delivery_instructions.map(|i| view! { <dt>"Instructions"</dt><dd>{i}</dd> })}
                            </dl>
                        </Card>
                    })}

                    <Card>
                        <h3 class="details-section__title">"Summary"</h3>
                        {move || {
                            let o = order();
                            view! {
                                <dl class="details-list">
                                    <dt>"Payment"</dt>
                                    <dd>
                                        <StatusBadge
                                            tone=o.payment_status.tone()
                                            label=o.payment_status.display_name().to_string()
                                        />
                                    </dd>
                                    <dt>"Shipping"</dt><dd>{format_currency(o.shipping_fee)}</dd>
                                    <dt>"Total"</dt><dd class="details-list__strong">{format_currency(o.total_amount)}</dd>
                                    <dt>"Placed"</dt><dd>{format_datetime(o.created_at.as_ref())}</dd>
                                    <dt>"Updated"</dt><dd>{format_datetime(o.updated_at.as_ref())}</dd>
                                </dl>
                            }
                        }}
                    </Card>
                </div>

                <h3 class="details-section__title">"Items"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Product"</TableHeaderCell>
                            <TableHeaderCell>"Brand"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Qty"</TableHeaderCell>
                            <TableHeaderCell>"Subtotal"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || order().items.into_iter().map(|item| {
                            let category = item.product.category().map(str::to_string);
                            let subtotal = item.subtotal();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {item.product.display_name().to_string()}
                                            {category.map(|c| view! { <span class="text-muted">{format!(" ({})", c)}</span> })}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{item.brand_name.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_currency(item.price)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{item.quantity}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_currency(subtotal)}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>

                <Show when=move || vm.editor.with(|e| e.is_editable())>
                    <div class="status-editor">
                        <Label>"Update status"</Label>
                        <Flex gap=FlexGap::Small>
                            <Select value=vm.selected_code>
                                {vm.editor.with_untracked(|e| e.options()).into_iter().map(|s: OrderStatus| {
                                    view! { <option value=s.code().to_string()>{s.display_name().to_string()}</option> }
                                }).collect_view()}
                            </Select>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || !can_submit.get())
                                on_click=move |_| vm.submit()
                            >
                                {move || vm.editor.with(|e| e.button_label())}
                            </Button>
                        </Flex>
                    </div>
                </Show>
            </div>
        </ModalFrame>
    }
}
