use crate::domain::common::wire::listing_items;
use serde::{Deserialize, Serialize};

/// Headline figures of the overview dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_buyers: usize,
    pub total_products: usize,
    pub total_orders: usize,
    pub total_revenue: f64,
}

impl DashboardStats {
    /// Build the stats from the raw customer, product and order listings.
    ///
    /// Revenue sums `totalAmount` of every order, falling back to `total`.
    pub fn from_listings(
        customers: &serde_json::Value,
        products: &serde_json::Value,
        orders: &serde_json::Value,
    ) -> Self {
        let order_items = listing_items(orders, "orders");
        let total_revenue = order_items
            .iter()
            .map(|o| {
                o.get("totalAmount")
                    .or_else(|| o.get("total"))
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0)
            })
            .sum();

        Self {
            total_buyers: listing_items(customers, "customers").len(),
            total_products: listing_items(products, "products").len(),
            total_orders: order_items.len(),
            total_revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_listings() {
        let customers = json!({ "customers": [{}, {}, {}] });
        let products = json!([{}, {}]);
        let orders = json!({ "orders": [
            { "totalAmount": 100.5 },
            { "total": 20 },
            { "status": "pending" }
        ]});
        let stats = DashboardStats::from_listings(&customers, &products, &orders);
        assert_eq!(stats.total_buyers, 3);
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_revenue, 120.5);
    }

    #[test]
    fn test_unexpected_shapes_yield_zeros() {
        let stats = DashboardStats::from_listings(&json!(null), &json!("x"), &json!({}));
        assert_eq!(stats, DashboardStats::default());
    }
}
