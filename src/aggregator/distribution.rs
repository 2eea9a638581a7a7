//! Grouped counts: city rankings and categorical mixes

use crate::filter::FilteredOrders;
use crate::store::OrderStore;
use std::collections::{HashMap, HashSet};

/// `(label, count)` pairs, highest count first
pub type Ranking = Vec<(String, usize)>;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityKind {
    Customers,
    Sellers,
}

impl CityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CityKind::Customers => "customers",
            CityKind::Sellers => "sellers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    PaymentType,
    OrderStatus,
}

/// Count labels, then sort by count descending. The sort is stable over
/// first-seen order so ties keep their input order.
fn rank<'a>(labels: impl IntoIterator<Item = &'a str>) -> Ranking {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for label in labels {
        if label.is_empty() {
            continue;
        }
        match positions.get(label) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(label, counts.len());
                counts.push((label.to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Distinct customers (or sellers) per city, top `n`
///
/// Customers come from the filtered orders; sellers from the items of the
/// filtered orders. Entities without a known city are skipped.
pub fn top_n_city_distribution<S: OrderStore + ?Sized>(
    filtered: &FilteredOrders<'_, S>,
    kind: CityKind,
    n: usize,
) -> Ranking {
    let store = filtered.store();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut cities: Vec<&str> = Vec::new();
    let mut unknown = 0usize;

    match kind {
        CityKind::Customers => {
            for order in filtered.orders() {
                let id = order.customer_id.as_str();
                if !seen.insert(id) {
                    continue;
                }
                match store.customer(id) {
                    Some(customer) => cities.push(customer.city.as_str()),
                    None => unknown += 1,
                }
            }
        }
        CityKind::Sellers => {
            for item in filtered.items() {
                let id = item.seller_id.as_str();
                if !seen.insert(id) {
                    continue;
                }
                match store.seller(id) {
                    Some(seller) => cities.push(seller.city.as_str()),
                    None => unknown += 1,
                }
            }
        }
    }

    if unknown > 0 {
        log::debug!("{} {} without a known city", unknown, kind.as_str());
    }

    let mut ranking = rank(cities);
    ranking.truncate(n);
    ranking
}

/// Frequency of a categorical column: payment types over the payments of the
/// filtered orders, or statuses over the filtered orders themselves
pub fn categorical_distribution<S: OrderStore + ?Sized>(
    filtered: &FilteredOrders<'_, S>,
    category: Category,
) -> Ranking {
    match category {
        Category::PaymentType => rank(filtered.payments().map(|p| p.payment_type.as_str())),
        Category::OrderStatus => rank(filtered.orders().iter().map(|o| o.status.as_str())),
    }
}

/// Items per product category over the items of the filtered orders, top `n`
pub fn top_n_category_distribution<S: OrderStore + ?Sized>(
    filtered: &FilteredOrders<'_, S>,
    n: usize,
) -> Ranking {
    let store = filtered.store();
    let categories = filtered.items().filter_map(|item| {
        store
            .product(&item.product_id)
            .and_then(|product| product.category.as_deref())
    });

    let mut ranking = rank(categories);
    ranking.truncate(n);
    ranking
}
