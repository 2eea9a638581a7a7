//! Headline metrics: order, customer and revenue totals

use crate::filter::FilteredOrders;
use crate::store::OrderStore;
use std::collections::HashSet;

/// Count of distinct order identifiers
pub fn total_orders<S: OrderStore + ?Sized>(filtered: &FilteredOrders<'_, S>) -> usize {
    filtered.order_ids().len()
}

/// Count of distinct customer identifiers
pub fn total_customers<S: OrderStore + ?Sized>(filtered: &FilteredOrders<'_, S>) -> usize {
    filtered
        .orders()
        .iter()
        .map(|order| order.customer_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Sum of item prices over the items of the filtered orders
pub fn total_revenue<S: OrderStore + ?Sized>(filtered: &FilteredOrders<'_, S>) -> f64 {
    filtered.items().map(|item| item.price).sum()
}

/// Sum of payment values over the payments of the filtered orders
pub fn total_payments<S: OrderStore + ?Sized>(filtered: &FilteredOrders<'_, S>) -> f64 {
    filtered.payments().map(|payment| payment.value).sum()
}

/// Revenue per order, 0.0 when there are no orders
pub fn avg_order_value(total_revenue: f64, total_orders: usize) -> f64 {
    if total_orders > 0 {
        total_revenue / total_orders as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter, DateRange};
    use crate::store::NormalizedStore;
    use crate::test_support::{date, item, order, payment};

    fn store() -> NormalizedStore {
        NormalizedStore::from_parts(
            vec![
                order("o1", "c1", "2017-01-05"),
                order("o2", "c1", "2017-02-10"),
                order("o3", "c2", "2017-02-20"),
            ],
            vec![
                item("o1", "s1", 100.0),
                item("o2", "s1", 40.0),
                item("o2", "s2", 10.0),
                item("o3", "s2", 25.5),
            ],
            vec![],
            vec![],
            vec![payment("o2", "credit_card", 50.0), payment("o3", "boleto", 30.0)],
            vec![],
        )
    }

    #[test]
    fn test_totals_over_filtered_orders() {
        let store = store();
        let filtered = filter(&store, DateRange::new(date("2017-02-01"), date("2017-02-28")));

        assert_eq!(total_orders(&filtered), 2);
        assert_eq!(total_customers(&filtered), 2);
        // o1's item is outside the range and must not be counted
        assert_eq!(total_revenue(&filtered), 75.5);
        assert_eq!(total_payments(&filtered), 80.0);
        assert_eq!(avg_order_value(total_revenue(&filtered), total_orders(&filtered)), 37.75);
    }

    #[test]
    fn test_empty_range_yields_zeros() {
        let store = store();
        let filtered = filter(&store, DateRange::new(date("2019-01-01"), date("2019-12-31")));

        assert_eq!(total_orders(&filtered), 0);
        assert_eq!(total_customers(&filtered), 0);
        assert_eq!(total_revenue(&filtered), 0.0);
        assert_eq!(avg_order_value(0.0, 0), 0.0);
    }
}
