use crate::dashboards::d400_overview::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_currency, format_number_int};
use crate::shared::notice::{Notice, NoticeBanner};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::DashboardStats;
use contracts::domain::common::StatusTone;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Overview dashboard with store-wide totals
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (stats, set_stats) = signal(None::<DashboardStats>);
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(None::<Notice>);

    let load = move || {
        set_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_dashboard_stats().await {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => {
                    log::error!("Failed to load dashboard stats: {}", e);
                    set_stats.set(Some(DashboardStats::default()));
                    error.set(Some(Notice::Error(format!("Failed to load dashboard: {}", e))));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let figure = move |f: fn(&DashboardStats) -> String| {
        Signal::derive(move || stats.get().as_ref().map(f))
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=loading
                        on_click=move |_| load()
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <NoticeBanner notice=error on_dismiss=Callback::new(move |_| error.set(None)) />

                <div class="stat-grid">
                    <StatCard
                        label="Total Buyers"
                        icon_name="customers"
                        value=figure(|s| format_number_int(s.total_buyers as f64))
                    />
                    <StatCard
                        label="Total Products"
                        icon_name="products"
                        value=figure(|s| format_number_int(s.total_products as f64))
                    />
                    <StatCard
                        label="Total Orders"
                        icon_name="orders"
                        value=figure(|s| format_number_int(s.total_orders as f64))
                    />
                    <StatCard
                        label="Total Revenue"
                        icon_name="revenue"
                        value=figure(|s| format_currency(s.total_revenue))
                        tone=StatusTone::Success
                    />
                </div>

                <Card>
                    <h3 class="details-section__title">"Quick Links"</h3>
                    <Flex gap=FlexGap::Small>
                        <Button on_click=move |_| ctx.open_page("a001_order")>"Manage Orders"</Button>
                        <Button on_click=move |_| ctx.open_page("a002_payment_request")>"Review Payments"</Button>
                        <Button on_click=move |_| ctx.open_page("sys_settings")>"Settings"</Button>
                    </Flex>
                </Card>
            </div>
        </PageFrame>
    }
}
