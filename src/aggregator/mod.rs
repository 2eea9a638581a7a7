//! Aggregator - read-only views over a filtered order set
//!
//! Every view starts from the same [`FilteredOrders`](crate::filter::FilteredOrders);
//! items, payments, customers and sellers are reached through the filtered
//! order identifiers, never filtered by date on their own.

pub mod distribution;
pub mod totals;
pub mod trend;

pub use distribution::{
    categorical_distribution, top_n_category_distribution, top_n_city_distribution, Category,
    CityKind, Ranking, DEFAULT_TOP_N,
};
pub use totals::{avg_order_value, total_customers, total_orders, total_payments, total_revenue};
pub use trend::{monthly_order_trend, MonthlyCount, YearMonth};
