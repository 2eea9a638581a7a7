//! Store over a single pre-joined wide table
//!
//! Each wide row is one (order × item × payment) combination with customer,
//! seller and product attributes repeated. Entities are recovered here so the
//! aggregates see each order, item and payment once.

use super::OrderStore;
use crate::error::DashboardResult;
use crate::loader::records::{
    CustomerColumns, ItemColumns, OrderColumns, PaymentColumns, ProductColumns, SellerColumns,
};
use crate::loader::{sources, DataShape, SourceSet, Table};
use crate::model::{columns, Customer, Order, OrderItem, Payment, Product, Seller};
use std::collections::{HashMap, HashSet};

#[derive(Default)]
struct OrderLines {
    items: Vec<OrderItem>,
    payments: Vec<Payment>,
}

pub struct DenormalizedStore {
    orders: Vec<Order>,
    lines: HashMap<String, OrderLines>,
    customers: HashMap<String, Customer>,
    sellers: HashMap<String, Seller>,
    products: HashMap<String, Product>,
    row_count: usize,
}

impl DenormalizedStore {
    pub fn load(sources: &SourceSet) -> DashboardResult<Self> {
        let table = Table::from_path(sources::MAIN_DATA, sources.required(sources::MAIN_DATA)?)?;
        Self::from_table(&table)
    }

    pub fn from_table(table: &Table) -> DashboardResult<Self> {
        let order_columns = OrderColumns::resolve(table)?;
        let item_columns = ItemColumns::resolve(table)?;
        let customer_columns = CustomerColumns::resolve(table)?;
        let seller_columns = SellerColumns::resolve(table)?;
        let payment_columns = PaymentColumns::resolve(table)?;
        let product_columns = match table.optional(columns::PRODUCT_ID) {
            Some(_) => Some(ProductColumns::resolve(table)?),
            None => None,
        };

        let mut orders = Vec::new();
        let mut lines: HashMap<String, OrderLines> = HashMap::new();
        let mut customers = HashMap::new();
        let mut sellers = HashMap::new();
        let mut products = HashMap::new();

        // Without a line/sequence column every row counts as its own item/payment
        let mut seen_items: HashSet<(String, String)> = HashSet::new();
        let mut seen_payments: HashSet<(String, String)> = HashSet::new();

        for row in table.rows() {
            // Parse every row so a malformed timestamp anywhere fails the load
            let order = order_columns.read(&row)?;
            let order_id = order.order_id.clone();

            if !lines.contains_key(&order_id) {
                lines.insert(order_id.clone(), OrderLines::default());
                orders.push(order);
            }
            let entry = lines.entry(order_id.clone()).or_default();

            if let Some(item) = item_columns.read(&row)? {
                let is_new = match &item.order_item_id {
                    Some(line) => seen_items.insert((order_id.clone(), line.clone())),
                    None => true,
                };
                if is_new {
                    entry.items.push(item);
                }
            }

            if let Some(payment) = payment_columns.read(&row)? {
                let is_new = match &payment.payment_sequential {
                    Some(seq) => seen_payments.insert((order_id.clone(), seq.clone())),
                    None => true,
                };
                if is_new {
                    entry.payments.push(payment);
                }
            }

            if let Some(customer) = customer_columns.read(&row) {
                customers
                    .entry(customer.customer_id.clone())
                    .or_insert(customer);
            }
            if let Some(seller) = seller_columns.read(&row) {
                sellers.entry(seller.seller_id.clone()).or_insert(seller);
            }
            if let Some(product) = product_columns.as_ref().and_then(|c| c.read(&row)) {
                products.entry(product.product_id.clone()).or_insert(product);
            }
        }

        if !item_columns.has_item_id() || !payment_columns.has_sequential() {
            log::warn!(
                "Wide table lacks '{}' or '{}'; repeated rows may be counted more than once",
                columns::ORDER_ITEM_ID,
                columns::PAYMENT_SEQUENTIAL
            );
        }

        log::info!(
            "📊 Denormalized store: {} rows → {} orders, {} customers, {} sellers",
            table.len(),
            orders.len(),
            customers.len(),
            sellers.len()
        );

        Ok(Self {
            orders,
            lines,
            customers,
            sellers,
            products,
            row_count: table.len(),
        })
    }

    /// Number of wide rows the store was built from
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

impl OrderStore for DenormalizedStore {
    fn shape(&self) -> DataShape {
        DataShape::Denormalized
    }

    fn orders(&self) -> &[Order] {
        &self.orders
    }

    fn items(&self, order_id: &str) -> &[OrderItem] {
        self.lines
            .get(order_id)
            .map(|lines| lines.items.as_slice())
            .unwrap_or(&[])
    }

    fn payments(&self, order_id: &str) -> &[Payment] {
        self.lines
            .get(order_id)
            .map(|lines| lines.payments.as_slice())
            .unwrap_or(&[])
    }

    fn customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.get(customer_id)
    }

    fn seller(&self, seller_id: &str) -> Option<&Seller> {
        self.sellers.get(seller_id)
    }

    fn product(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }
}
