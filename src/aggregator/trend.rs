//! Monthly order trend

use crate::filter::FilteredOrders;
use crate::store::OrderStore;
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashSet};

/// Calendar month, ordered chronologically and displayed as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCount {
    pub month: YearMonth,
    pub orders: usize,
}

/// Distinct orders per purchase month, ascending. Months without orders
/// are not emitted.
pub fn monthly_order_trend<S: OrderStore + ?Sized>(
    filtered: &FilteredOrders<'_, S>,
) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<YearMonth, HashSet<&str>> = BTreeMap::new();

    for order in filtered.orders() {
        if let Some(date) = order.purchase_date() {
            months
                .entry(YearMonth::of(date))
                .or_default()
                .insert(order.order_id.as_str());
        }
    }

    months
        .into_iter()
        .map(|(month, ids)| MonthlyCount {
            month,
            orders: ids.len(),
        })
        .collect()
}
