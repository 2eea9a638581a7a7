//! Order stores: one adapter per storage shape behind a common view
//!
//! # Architecture
//!
//! ```text
//! main_data.csv ─────────────→ DenormalizedStore ─┐
//!                                                  ├→ OrderStore → filter → aggregator
//! orders/items/customers/... → NormalizedStore ───┘
//! ```
//!
//! Aggregates only ever reach items, payments, customers and sellers
//! through an order, so a date filter on orders applies to everything.

pub mod denormalized;
pub mod normalized;

pub use denormalized::DenormalizedStore;
pub use normalized::NormalizedStore;

use crate::loader::DataShape;
use crate::model::{Customer, Order, OrderItem, Payment, Product, Seller};

pub trait OrderStore {
    fn shape(&self) -> DataShape;

    /// Distinct orders in source order
    fn orders(&self) -> &[Order];

    /// Items belonging to an order (empty when it has none)
    fn items(&self, order_id: &str) -> &[OrderItem];

    /// Payments belonging to an order (empty when it has none)
    fn payments(&self, order_id: &str) -> &[Payment];

    fn customer(&self, customer_id: &str) -> Option<&Customer>;

    fn seller(&self, seller_id: &str) -> Option<&Seller>;

    fn product(&self, product_id: &str) -> Option<&Product>;
}
