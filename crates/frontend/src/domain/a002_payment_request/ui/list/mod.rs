pub mod state;

use self::state::{
    create_state, status_filter_from_code, PaymentListState, PaymentListStats, ALL_STATUSES,
};
use super::details::PaymentRequestDetails;
use crate::domain::a002_payment_request::api::fetch_payment_requests;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::format_currency;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_state::{FetchRequest, ListAction};
use crate::shared::list_utils::highlight_matches;
use crate::shared::notice::{Notice, NoticeBanner};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::row_transition::RowTransitions;
use contracts::domain::a002_payment_request::{PaymentRequest, PaymentStatus};
use contracts::domain::common::{AggregateId, StatusTone};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn dispatch(state: RwSignal<PaymentListState>, action: ListAction<PaymentRequest, PaymentStatus>) {
    if let Some(request) = state.try_update(|s| s.reduce(action)).flatten() {
        run_fetch(state, request);
    }
}

fn run_fetch(state: RwSignal<PaymentListState>, request: FetchRequest<PaymentStatus>) {
    spawn_local(async move {
        let action = match fetch_payment_requests(&request.query).await {
            Ok(page) => {
                log!("payments page {} loaded: {} rows", request.query.page, page.sessions.len());
                ListAction::Loaded {
                    request_id: request.request_id,
                    total_pages: page.total_pages(),
                    items: page.sessions,
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
pub fn PaymentRequestList() -> impl IntoView {
    let state = create_state();
    // List rows already carry the full record, so no extra fetch on open
    let selected = RwSignal::new(None::<PaymentRequest>);

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
        untrack(move || {
            dispatch(state, ListAction::SetStatusFilter(status_filter_from_code(&code)))
        });
    });

    let open_detail = move |payment: PaymentRequest| selected.set(Some(payment));

    let transitions = RowTransitions::for_list(state, selected);

    let stats = Signal::derive(move || state.with(|s| PaymentListStats::from_rows(&s.items)));
    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a002_payment_request--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Payment Requests"</h1>
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
                        label="Total Requests"
                        icon_name="payments"
                        value=Signal::derive(move || Some(stats.get().total.to_string()))
                    />
                    <StatCard
                        label="Awaiting Review"
                        icon_name="pending"
                        value=Signal::derive(move || Some(stats.get().submitted.to_string()))
                        tone=StatusTone::Warning
                    />
                    <StatCard
                        label="Approved"
                        icon_name="check"
                        value=Signal::derive(move || Some(stats.get().approved.to_string()))
                        tone=StatusTone::Success
                    />
                    <StatCard
                        label="Rejected"
                        icon_name="x-circle"
                        value=Signal::derive(move || Some(stats.get().rejected.to_string()))
                        tone=StatusTone::Error
                    />
                </div>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <Input
                                value=search_query
                                placeholder="Search by customer, session or ID..."
                            />
                        </div>
                        <Select value=status_code>
                            <option value=ALL_STATUSES>"All Status"</option>
                            {PaymentStatus::all().into_iter().map(|s| view! {
                                <option value=s.code().to_string()>{s.display_name().to_string()}</option>
                            }).collect_view()}
                        </Select>
                    </Flex>
                </div>

                <NoticeBanner
                    notice=Signal::derive(move || state.with(|s| s.error.clone().map(Notice::Error)))
                    on_dismiss=Callback::new(move |_| dispatch(state, ListAction::DismissError))
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Amount"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
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
                                                    <span>"Loading payment requests..."</span>
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
                                                <span class="text-muted">"No payment requests found"</span>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                let search = state.with(|s| s.search.clone());
                                rows.into_iter()
                                    .map(|p| {
                                        let name = if p.customer_name().is_empty() {
                                            "Unknown".to_string()
                                        } else {
                                            p.customer_name().to_string()
                                        };
                                        let session = p.session_label();
                                        let stored = StoredValue::new(p.clone());
                                        let search = search.clone();
                                        view! {
                                            <TableRow
                                                on:click=move |_| open_detail(stored.get_value())
                                                attr:style="cursor: pointer;"
                                            >
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <div>
                                                            <div class="table__primary">{highlight_matches(&name, &search)}</div>
                                                            <div class="table__secondary">{format!("Session {}", session)}</div>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_currency(p.total_amount)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <StatusBadge
                                                            tone=p.payment_status.tone()
                                                            label=p.payment_status.display_name().to_string()
                                                        />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_date(p.created_at.as_ref())}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="table__action" title="Review">{icon("eye")}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
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

            {move || selected.get().map(|payment| {
                let pending = state.with_untracked(|s| s.is_in_flight(payment.id.as_str()));
                view! {
                    <PaymentRequestDetails
                        payment=payment
                        on_close=Callback::new(move |_| selected.set(None))
                        pending=pending
                        transitions=transitions
                    />
                }
            })}
        </PageFrame>
    }
}
