pub mod state;

use self::state::{create_state, status_filter_from_code, OrderListState, OrderListStats, ALL_STATUSES};
use super::details::OrderDetails;
use crate::domain::a001_order::api::{fetch_order, fetch_orders};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::format_currency;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::list_state::{FetchRequest, ListAction};
use crate::shared::list_utils::highlight_matches;
use crate::shared::notice::{Notice, NoticeBanner};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::row_transition::RowTransitions;
use contracts::domain::a001_order::{Order, OrderStatus};
use contracts::domain::common::{AggregateId, StatusTone};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Apply an action and run the fetch it asks for
fn dispatch(state: RwSignal<OrderListState>, action: ListAction<Order, OrderStatus>) {
    if let Some(request) = state.try_update(|s| s.reduce(action)).flatten() {
        run_fetch(state, request);
    }
}

fn run_fetch(state: RwSignal<OrderListState>, request: FetchRequest<OrderStatus>) {
    spawn_local(async move {
        let result = fetch_orders(&request.query).await;
        let action = match result {
            Ok(page) => {
                log!("orders page {} loaded: {} rows", request.query.page, page.orders.len());
                ListAction::Loaded {
                    request_id: request.request_id,
                    total_pages: page.total_pages(),
                    items: page.orders,
                }
            }
            Err(e) => ListAction::LoadFailed {
                request_id: request.request_id,
                error: e.to_string(),
            },
        };
        state.try_update(|s| s.reduce(action));
    });
}

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let selected = RwSignal::new(None::<Order>);
    let opening = RwSignal::new(None::<String>);
    let open_error = RwSignal::new(None::<Notice>);

    let compact = Signal::derive(move || ctx.viewport.get().is_compact());

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded || s.loading) {
            dispatch(state, ListAction::Reload);
        }
    });

    let search_query = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search_query.get();
        untrack(move || dispatch(state, ListAction::SetSearch(v)));
    });

    let status_code = RwSignal::new(ALL_STATUSES.to_string());
    Effect::new(move || {
        let code = status_code.get();
        untrack(move || dispatch(state, ListAction::SetStatusFilter(status_filter_from_code(&code))));
    });

    let open_detail = move |order: Order| {
        if opening.get_untracked().is_some() {
            return;
        }
        opening.set(Some(order.id.as_str().to_string()));
        open_error.set(None);
        spawn_local(async move {
            match fetch_order(&order.id).await {
                Ok(full) => selected.set(Some(full)),
                Err(e) => {
                    log::warn!("failed to open order {}: {}", order.id, e);
                    open_error.set(Some(Notice::Error(e.to_string())));
                }
            }
            opening.set(None);
        });
    };

    let transitions = RowTransitions::for_list(state, selected);

    let stats = Signal::derive(move || state.with(|s| OrderListStats::from_rows(&s.items)));
    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a001_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                    <Badge variant="primary".to_string()>
                        {move || stats.get().total.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dispatch(state, ListAction::Reload)
                        disabled=loading
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Orders"
                        icon_name="orders"
                        value=Signal::derive(move || Some(stats.get().total.to_string()))
                    />
                    <StatCard
                        label="Pending"
                        icon_name="pending"
                        value=Signal::derive(move || Some(stats.get().pending.to_string()))
                        tone=StatusTone::Warning
                    />
                    <StatCard
                        label="Completed"
                        icon_name="check"
                        value=Signal::derive(move || Some(stats.get().completed.to_string()))
                        tone=StatusTone::Success
                    />
                </div>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <Input
                                value=search_query
                                placeholder="Search orders by customer name or ID..."
                            />
                        </div>
                        <Select value=status_code>
                            <option value=ALL_STATUSES>"All Status"</option>
                            {OrderStatus::all().into_iter().map(|s| view! {
                                <option value=s.code().to_string()>{s.display_name().to_string()}</option>
                            }).collect_view()}
                        </Select>
                    </Flex>
                </div>

                <NoticeBanner
                    notice=Signal::derive(move || state.with(|s| s.error.clone().map(Notice::Error)))
                    on_dismiss=Callback::new(move |_| dispatch(state, ListAction::DismissError))
                />
                <NoticeBanner
                    notice=open_error
                    on_dismiss=Callback::new(move |_| open_error.set(None))
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <Show when=move || !compact.get()>
                                    <TableHeaderCell>"Items"</TableHeaderCell>
                                </Show>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <Show when=move || !compact.get()>
                                    <TableHeaderCell>"Shipping"</TableHeaderCell>
                                    <TableHeaderCell>"Payment"</TableHeaderCell>
                                </Show>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <Show when=move || !compact.get()>
                                    <TableHeaderCell>"Date"</TableHeaderCell>
                                </Show>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                if loading.get() && !state.with(|s| s.is_loaded) {
                                    return view! {
                                        <TableRow>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Spinner />
                                                    <span>"Loading orders..."</span>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                let rows = state.with(|s| s.visible_items());
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell>
                                                <span class="text-muted">"No orders found"</span>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                let search = state.with(|s| s.search.clone());
                                rows.into_iter()
                                    .map(|order| view! {
                                        <OrderRow order=order search=search.clone() compact=compact on_open=open_detail />
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    disabled=loading
                    on_page_change=Callback::new(move |page| dispatch(state, ListAction::SetPage(page)))
                />
            </div>

            {move || selected.get().map(|order| {
                let pending = state.with_untracked(|s| s.is_in_flight(order.id.as_str()));
                view! {
                    <OrderDetails
                        order=order
                        on_close=Callback::new(move |_| selected.set(None))
                        pending=pending
                        transitions=transitions
                    />
                }
            })}
        </PageFrame>
    }
}

/// One table row; secondary columns are dropped on compact viewports
#[component]
fn OrderRow<F>(order: Order, search: String, compact: Signal<bool>, on_open: F) -> impl IntoView
where
    F: Fn(Order) + Copy + Send + Sync + 'static,
{
    let order = StoredValue::new(order);
    let o = order.get_value();
    let name = if o.customer_name().is_empty() {
        "Unknown".to_string()
    } else {
        o.customer_name().to_string()
    };

    view! {
        <TableRow on:click=move |_| on_open(order.get_value()) attr:style="cursor: pointer;">
            <TableCell>
                <TableCellLayout truncate=true>
                    <div>
                        <div class="table__primary">{highlight_matches(&name, &search)}</div>
                        <div class="table__secondary">{format!("#{}", o.id.short())}</div>
                    </div>
                </TableCellLayout>
            </TableCell>
            <Show when=move || !compact.get()>
                <TableCell>
                    <TableCellLayout>{format!("{} items", order.with_value(|o| o.items_count()))}</TableCellLayout>
                </TableCell>
            </Show>
            <TableCell>
                <TableCellLayout>{format_currency(o.total_amount)}</TableCellLayout>
            </TableCell>
            <Show when=move || !compact.get()>
                <TableCell>
                    <TableCellLayout>{order.with_value(|o| format_currency(o.shipping_fee))}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge
                            tone=order.with_value(|o| o.payment_status.tone())
                            label=order.with_value(|o| o.payment_status.display_name().to_string())
                        />
                    </TableCellLayout>
                </TableCell>
            </Show>
            <TableCell>
                <TableCellLayout>
                    <StatusBadge tone=o.status.tone() label=o.status.display_name().to_string() />
                </TableCellLayout>
            </TableCell>
            <Show when=move || !compact.get()>
                <TableCell>
                    <TableCellLayout>{order.with_value(|o| format_date(o.created_at.as_ref()))}</TableCellLayout>
                </TableCell>
            </Show>
            <TableCell>
                <TableCellLayout>
                    <span class="table__action" title="View">{crate::shared::icons::icon("eye")}</span>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
