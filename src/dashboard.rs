//! Dashboard snapshot: every aggregate for one date range

use crate::aggregator::{
    avg_order_value, categorical_distribution, monthly_order_trend, top_n_category_distribution,
    top_n_city_distribution, total_customers, total_orders, total_payments, total_revenue,
    Category, CityKind, MonthlyCount, Ranking, DEFAULT_TOP_N,
};
use crate::filter::{filter, DateRange};
use crate::store::OrderStore;
use serde::Serialize;

/// Inputs the presentation layer controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardState {
    pub range: DateRange,
    pub top_n: usize,
}

impl DashboardState {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub range: DateRange,
    pub total_orders: usize,
    pub total_customers: usize,
    pub total_revenue: f64,
    pub total_payments: f64,
    pub avg_order_value: f64,
    pub monthly_orders: Vec<MonthlyCount>,
    pub customer_cities: Ranking,
    pub seller_cities: Ranking,
    pub payment_types: Ranking,
    pub order_statuses: Ranking,
    pub product_categories: Ranking,
}

/// Run the filter and every aggregate for `state`
///
/// Pure over the loaded store: the same store and state always yield the
/// same dashboard, so the host can call this on every input change.
pub fn render<S: OrderStore + ?Sized>(store: &S, state: &DashboardState) -> Dashboard {
    let filtered = filter(store, state.range);

    let orders = total_orders(&filtered);
    let revenue = total_revenue(&filtered);

    Dashboard {
        range: filtered.range(),
        total_orders: orders,
        total_customers: total_customers(&filtered),
        total_revenue: revenue,
        total_payments: total_payments(&filtered),
        avg_order_value: avg_order_value(revenue, orders),
        monthly_orders: monthly_order_trend(&filtered),
        customer_cities: top_n_city_distribution(&filtered, CityKind::Customers, state.top_n),
        seller_cities: top_n_city_distribution(&filtered, CityKind::Sellers, state.top_n),
        payment_types: categorical_distribution(&filtered, Category::PaymentType),
        order_statuses: categorical_distribution(&filtered, Category::OrderStatus),
        product_categories: top_n_category_distribution(&filtered, state.top_n),
    }
}
