//! Column resolution and row decoding for each entity
//!
//! Each `*Columns` struct resolves its column indices once per table, failing
//! with `MissingColumn` for required ones, then decodes rows. The same
//! decoders serve the wide table and the normalized tables since both use
//! the same column names.

use super::table::{Row, Table};
use crate::error::DashboardResult;
use crate::model::{columns, Customer, Order, OrderItem, Payment, Product, Seller};

pub struct OrderColumns {
    order_id: usize,
    customer_id: usize,
    status: usize,
    purchase: usize,
    approved: Option<usize>,
    carrier: Option<usize>,
    delivered: Option<usize>,
    estimated: Option<usize>,
}

impl OrderColumns {
    pub fn resolve(table: &Table) -> DashboardResult<Self> {
        Ok(Self {
            order_id: table.require(columns::ORDER_ID)?,
            customer_id: table.require(columns::CUSTOMER_ID)?,
            status: table.require(columns::ORDER_STATUS)?,
            purchase: table.require(columns::PURCHASE_TIMESTAMP)?,
            approved: table.optional(columns::APPROVED_AT),
            carrier: table.optional(columns::DELIVERED_CARRIER_DATE),
            delivered: table.optional(columns::DELIVERED_CUSTOMER_DATE),
            estimated: table.optional(columns::ESTIMATED_DELIVERY_DATE),
        })
    }

    pub fn read(&self, row: &Row) -> DashboardResult<Order> {
        Ok(Order {
            order_id: row.text(self.order_id).to_string(),
            customer_id: row.text(self.customer_id).to_string(),
            purchase_timestamp: row.timestamp(columns::PURCHASE_TIMESTAMP, Some(self.purchase))?,
            approved_at: row.timestamp(columns::APPROVED_AT, self.approved)?,
            delivered_carrier_date: row.timestamp(columns::DELIVERED_CARRIER_DATE, self.carrier)?,
            delivered_customer_date: row.timestamp(columns::DELIVERED_CUSTOMER_DATE, self.delivered)?,
            estimated_delivery_date: row.timestamp(columns::ESTIMATED_DELIVERY_DATE, self.estimated)?,
            status: row.text(self.status).to_string(),
        })
    }
}

pub struct ItemColumns {
    order_id: usize,
    order_item_id: Option<usize>,
    seller_id: usize,
    product_id: Option<usize>,
    price: usize,
}

impl ItemColumns {
    pub fn resolve(table: &Table) -> DashboardResult<Self> {
        Ok(Self {
            order_id: table.require(columns::ORDER_ID)?,
            order_item_id: table.optional(columns::ORDER_ITEM_ID),
            seller_id: table.require(columns::SELLER_ID)?,
            product_id: table.optional(columns::PRODUCT_ID),
            price: table.require(columns::PRICE)?,
        })
    }

    pub fn has_item_id(&self) -> bool {
        self.order_item_id.is_some()
    }

    /// `None` for rows that carry no item (an order without lines in a wide table)
    pub fn read(&self, row: &Row) -> DashboardResult<Option<OrderItem>> {
        let seller_id = row.text(self.seller_id);
        let product_id = row.opt_text(self.product_id).unwrap_or("");
        if seller_id.is_empty() && product_id.is_empty() {
            return Ok(None);
        }

        Ok(Some(OrderItem {
            order_id: row.text(self.order_id).to_string(),
            order_item_id: row.opt_text(self.order_item_id).map(str::to_string),
            seller_id: seller_id.to_string(),
            product_id: product_id.to_string(),
            price: row.amount(columns::PRICE, Some(self.price))?,
        }))
    }
}

pub struct CustomerColumns {
    customer_id: usize,
    city: usize,
    state: Option<usize>,
}

impl CustomerColumns {
    pub fn resolve(table: &Table) -> DashboardResult<Self> {
        Ok(Self {
            customer_id: table.require(columns::CUSTOMER_ID)?,
            city: table.require(columns::CUSTOMER_CITY)?,
            state: table.optional(columns::CUSTOMER_STATE),
        })
    }

    pub fn read(&self, row: &Row) -> Option<Customer> {
        let customer_id = row.text(self.customer_id);
        if customer_id.is_empty() {
            return None;
        }

        Some(Customer {
            customer_id: customer_id.to_string(),
            city: row.text(self.city).to_string(),
            state: row.opt_text(self.state).unwrap_or("").to_string(),
        })
    }
}

pub struct SellerColumns {
    seller_id: usize,
    city: usize,
    state: Option<usize>,
}

impl SellerColumns {
    pub fn resolve(table: &Table) -> DashboardResult<Self> {
        Ok(Self {
            seller_id: table.require(columns::SELLER_ID)?,
            city: table.require(columns::SELLER_CITY)?,
            state: table.optional(columns::SELLER_STATE),
        })
    }

    pub fn read(&self, row: &Row) -> Option<Seller> {
        let seller_id = row.text(self.seller_id);
        if seller_id.is_empty() {
            return None;
        }

        Some(Seller {
            seller_id: seller_id.to_string(),
            city: row.text(self.city).to_string(),
            state: row.opt_text(self.state).unwrap_or("").to_string(),
        })
    }
}

pub struct PaymentColumns {
    order_id: usize,
    sequential: Option<usize>,
    payment_type: usize,
    value: Option<usize>,
}

impl PaymentColumns {
    pub fn resolve(table: &Table) -> DashboardResult<Self> {
        Ok(Self {
            order_id: table.require(columns::ORDER_ID)?,
            sequential: table.optional(columns::PAYMENT_SEQUENTIAL),
            payment_type: table.require(columns::PAYMENT_TYPE)?,
            value: table.optional(columns::PAYMENT_VALUE),
        })
    }

    pub fn has_sequential(&self) -> bool {
        self.sequential.is_some()
    }

    pub fn read(&self, row: &Row) -> DashboardResult<Option<Payment>> {
        let payment_type = row.text(self.payment_type);
        if payment_type.is_empty() {
            return Ok(None);
        }

        Ok(Some(Payment {
            order_id: row.text(self.order_id).to_string(),
            payment_sequential: row.opt_text(self.sequential).map(str::to_string),
            payment_type: payment_type.to_string(),
            value: row.amount(columns::PAYMENT_VALUE, self.value)?,
        }))
    }
}

pub struct ProductColumns {
    product_id: usize,
    category: Option<usize>,
}

impl ProductColumns {
    pub fn resolve(table: &Table) -> DashboardResult<Self> {
        Ok(Self {
            product_id: table.require(columns::PRODUCT_ID)?,
            category: table.optional(columns::PRODUCT_CATEGORY),
        })
    }

    pub fn read(&self, row: &Row) -> Option<Product> {
        let product_id = row.text(self.product_id);
        if product_id.is_empty() {
            return None;
        }

        Some(Product {
            product_id: product_id.to_string(),
            category: row.opt_text(self.category).map(str::to_string),
        })
    }
}
