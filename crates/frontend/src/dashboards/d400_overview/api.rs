use crate::shared::api_utils::get_json;
use contracts::dashboards::d400_overview::DashboardStats;
use contracts::domain::common::ActionError;

/// Fetch the three listings concurrently and reduce them to headline figures.
///
/// Any failed listing fails the whole call.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, ActionError> {
    let (customers, products, orders) = futures::join!(
        get_json::<serde_json::Value>("/customers"),
        get_json::<serde_json::Value>("/products"),
        get_json::<serde_json::Value>("/orders"),
    );
    Ok(DashboardStats::from_listings(&customers?, &products?, &orders?))
}
