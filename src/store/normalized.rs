//! Store over separate orders, items, customers, sellers, payments and
//! products tables, joined on identifiers

use super::OrderStore;
use crate::error::DashboardResult;
use crate::loader::records::{
    CustomerColumns, ItemColumns, OrderColumns, PaymentColumns, ProductColumns, SellerColumns,
};
use crate::loader::{sources, DataShape, SourceSet, Table};
use crate::model::{Customer, Order, OrderItem, Payment, Product, Seller};
use std::collections::{HashMap, HashSet};

pub struct NormalizedStore {
    orders: Vec<Order>,
    items_by_order: HashMap<String, Vec<OrderItem>>,
    payments_by_order: HashMap<String, Vec<Payment>>,
    customers: HashMap<String, Customer>,
    sellers: HashMap<String, Seller>,
    products: HashMap<String, Product>,
}

impl NormalizedStore {
    /// Load every table of a normalized source set
    pub fn load(sources: &SourceSet) -> DashboardResult<Self> {
        let orders_table = Table::from_path(sources::ORDERS, sources.required(sources::ORDERS)?)?;
        let items_table =
            Table::from_path(sources::ORDER_ITEMS, sources.required(sources::ORDER_ITEMS)?)?;
        let customers_table =
            Table::from_path(sources::CUSTOMERS, sources.required(sources::CUSTOMERS)?)?;
        let sellers_table = Table::from_path(sources::SELLERS, sources.required(sources::SELLERS)?)?;
        let payments_table =
            Table::from_path(sources::PAYMENTS, sources.required(sources::PAYMENTS)?)?;
        let products_table = match sources.optional(sources::PRODUCTS) {
            Some(path) => Some(Table::from_path(sources::PRODUCTS, path)?),
            None => None,
        };

        let order_columns = OrderColumns::resolve(&orders_table)?;
        let orders = orders_table
            .rows()
            .map(|row| order_columns.read(&row))
            .collect::<DashboardResult<Vec<_>>>()?;

        let item_columns = ItemColumns::resolve(&items_table)?;
        let mut items = Vec::with_capacity(items_table.len());
        for row in items_table.rows() {
            if let Some(item) = item_columns.read(&row)? {
                items.push(item);
            }
        }

        let customer_columns = CustomerColumns::resolve(&customers_table)?;
        let customers = customers_table
            .rows()
            .filter_map(|row| customer_columns.read(&row))
            .collect();

        let seller_columns = SellerColumns::resolve(&sellers_table)?;
        let sellers = sellers_table
            .rows()
            .filter_map(|row| seller_columns.read(&row))
            .collect();

        let payment_columns = PaymentColumns::resolve(&payments_table)?;
        let mut payments = Vec::with_capacity(payments_table.len());
        for row in payments_table.rows() {
            if let Some(payment) = payment_columns.read(&row)? {
                payments.push(payment);
            }
        }

        let products = match products_table {
            Some(table) => {
                let product_columns = ProductColumns::resolve(&table)?;
                table
                    .rows()
                    .filter_map(|row| product_columns.read(&row))
                    .collect()
            }
            None => Vec::new(),
        };

        Ok(Self::from_parts(
            orders, items, customers, sellers, payments, products,
        ))
    }

    /// Build the join indexes from already decoded entities
    pub fn from_parts(
        orders: Vec<Order>,
        items: Vec<OrderItem>,
        customers: Vec<Customer>,
        sellers: Vec<Seller>,
        payments: Vec<Payment>,
        products: Vec<Product>,
    ) -> Self {
        let mut seen = HashSet::with_capacity(orders.len());
        let total_orders = orders.len();
        let orders: Vec<Order> = orders
            .into_iter()
            .filter(|order| seen.insert(order.order_id.clone()))
            .collect();
        if orders.len() < total_orders {
            log::debug!(
                "Dropped {} duplicate order rows",
                total_orders - orders.len()
            );
        }

        let mut items_by_order: HashMap<String, Vec<OrderItem>> = HashMap::new();
        let mut orphan_items = 0usize;
        for item in items {
            if seen.contains(&item.order_id) {
                items_by_order
                    .entry(item.order_id.clone())
                    .or_default()
                    .push(item);
            } else {
                orphan_items += 1;
            }
        }

        let mut payments_by_order: HashMap<String, Vec<Payment>> = HashMap::new();
        let mut orphan_payments = 0usize;
        for payment in payments {
            if seen.contains(&payment.order_id) {
                payments_by_order
                    .entry(payment.order_id.clone())
                    .or_default()
                    .push(payment);
            } else {
                orphan_payments += 1;
            }
        }

        if orphan_items > 0 || orphan_payments > 0 {
            log::debug!(
                "Ignored {} items and {} payments without a matching order",
                orphan_items,
                orphan_payments
            );
        }

        let mut customer_map = HashMap::with_capacity(customers.len());
        for customer in customers {
            customer_map
                .entry(customer.customer_id.clone())
                .or_insert(customer);
        }

        let mut seller_map = HashMap::with_capacity(sellers.len());
        for seller in sellers {
            seller_map.entry(seller.seller_id.clone()).or_insert(seller);
        }

        let mut product_map = HashMap::with_capacity(products.len());
        for product in products {
            product_map.entry(product.product_id.clone()).or_insert(product);
        }

        log::info!(
            "📊 Normalized store: {} orders, {} customers, {} sellers, {} products",
            orders.len(),
            customer_map.len(),
            seller_map.len(),
            product_map.len()
        );

        Self {
            orders,
            items_by_order,
            payments_by_order,
            customers: customer_map,
            sellers: seller_map,
            products: product_map,
        }
    }
}

impl OrderStore for NormalizedStore {
    fn shape(&self) -> DataShape {
        DataShape::Normalized
    }

    fn orders(&self) -> &[Order] {
        &self.orders
    }

    fn items(&self, order_id: &str) -> &[OrderItem] {
        self.items_by_order
            .get(order_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn payments(&self, order_id: &str) -> &[Payment] {
        self.payments_by_order
            .get(order_id)
            .map(Vec::as_slice)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{item, order, payment};

    #[test]
    fn test_joins_by_order_id() {
        let store = NormalizedStore::from_parts(
            vec![order("o1", "c1", "2017-01-05"), order("o2", "c2", "2017-02-10")],
            vec![item("o1", "s1", 10.0), item("o1", "s2", 5.0), item("ghost", "s1", 99.0)],
            vec![],
            vec![],
            vec![payment("o2", "boleto", 20.0)],
            vec![],
        );

        assert_eq!(store.shape(), DataShape::Normalized);
        assert_eq!(store.orders().len(), 2);
        assert_eq!(store.items("o1").len(), 2);
        assert!(store.items("o2").is_empty());
        assert!(store.items("ghost").is_empty());
        assert_eq!(store.payments("o2")[0].payment_type, "boleto");
    }

    #[test]
    fn test_duplicate_orders_keep_first() {
        let mut dup = order("o1", "c9", "2018-05-01");
        dup.status = "canceled".to_string();

        let store = NormalizedStore::from_parts(
            vec![order("o1", "c1", "2017-01-05"), dup],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
        );

        assert_eq!(store.orders().len(), 1);
        assert_eq!(store.orders()[0].customer_id, "c1");
    }
}
