//! Date Range Filter - restricts orders to an inclusive purchase-date interval

use crate::model::{Order, OrderItem, Payment};
use crate::store::OrderStore;
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

/// Inclusive calendar-date interval. `start > end` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Move the start date by whole months, saturating at the calendar limits
    pub fn shift_start(&self, months: i32) -> Self {
        Self {
            start: shift_months(self.start, months),
            end: self.end,
        }
    }

    /// Move the end date by whole months, saturating at the calendar limits
    pub fn shift_end(&self, months: i32) -> Self {
        Self {
            start: self.start,
            end: shift_months(self.end, months),
        }
    }

    /// Keep both ends inside `bounds`
    pub fn clamp_to(&self, bounds: &DateRange) -> Self {
        Self {
            start: self.start.clamp(bounds.start, bounds.end),
            end: self.end.clamp(bounds.start, bounds.end),
        }
    }
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let delta = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    };
    shifted.unwrap_or(date)
}

/// Orders that passed the date filter, with joined access to their
/// dependent rows through the store
pub struct FilteredOrders<'a, S: OrderStore + ?Sized> {
    store: &'a S,
    range: DateRange,
    orders: Vec<&'a Order>,
}

impl<'a, S: OrderStore + ?Sized> FilteredOrders<'a, S> {
    pub fn store(&self) -> &'a S {
        self.store
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn orders(&self) -> &[&'a Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn order_ids(&self) -> HashSet<&'a str> {
        self.orders.iter().map(|o| o.order_id.as_str()).collect()
    }

    /// Items of the filtered orders, in order sequence
    pub fn items(&self) -> impl Iterator<Item = &'a OrderItem> + '_ {
        let store = self.store;
        self.orders
            .iter()
            .flat_map(move |order| store.items(&order.order_id).iter())
    }

    /// Payments of the filtered orders, in order sequence
    pub fn payments(&self) -> impl Iterator<Item = &'a Payment> + '_ {
        let store = self.store;
        self.orders
            .iter()
            .flat_map(move |order| store.payments(&order.order_id).iter())
    }
}

/// Every order whose purchase date lies in `range`, in source order.
/// Orders without a purchase timestamp never match.
pub fn filter<S: OrderStore + ?Sized>(store: &S, range: DateRange) -> FilteredOrders<'_, S> {
    let orders: Vec<&Order> = if range.is_empty() {
        Vec::new()
    } else {
        store
            .orders()
            .iter()
            .filter(|order| order.purchase_date().map_or(false, |d| range.contains(d)))
            .collect()
    };

    log::debug!(
        "Filter {}..={} kept {} of {} orders",
        range.start,
        range.end,
        orders.len(),
        store.orders().len()
    );

    FilteredOrders {
        store,
        range,
        orders,
    }
}

/// Earliest and latest purchase dates in the store
pub fn date_bounds<S: OrderStore + ?Sized>(store: &S) -> Option<DateRange> {
    let mut dates = store.orders().iter().filter_map(Order::purchase_date);
    let first = dates.next()?;
    let (min, max) = dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d)));
    Some(DateRange::new(min, max))
}
