//! Maps page keys (the `?active=` value) to page components

use crate::dashboards::d400_overview::ui::dashboard::OverviewDashboard;
use crate::domain::a001_order::ui::list::OrderList;
use crate::domain::a002_payment_request::ui::list::PaymentRequestList;
use crate::system::settings::ui::page::SettingsPage;
use leptos::prelude::*;

pub fn page_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_overview" => "Dashboard",
        "a001_order" => "Orders",
        "a002_payment_request" => "Payments",
        "sys_settings" => "Settings",
        _ => "Unknown page",
    }
}

pub fn render_page_content(key: &str) -> AnyView {
    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "a001_order" => view! { <OrderList /> }.into_any(),
        "a002_payment_request" => view! { <PaymentRequestList /> }.into_any(),
        "sys_settings" => view! { <SettingsPage /> }.into_any(),
        _ => {
            log::warn!("unknown page key '{}'", key);
            view! {
                <div class="page">
                    <div class="alert alert--error">{format!("Unknown page: {}", key)}</div>
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_labels() {
        assert_eq!(page_label_for_key("a001_order"), "Orders");
        assert_eq!(page_label_for_key("sys_settings"), "Settings");
        assert_eq!(page_label_for_key("nope"), "Unknown page");
    }
}
