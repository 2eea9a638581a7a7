//! Entities of the e-commerce dataset

use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub purchase_timestamp: Option<NaiveDateTime>,
    pub approved_at: Option<NaiveDateTime>,
    pub delivered_carrier_date: Option<NaiveDateTime>,
    pub delivered_customer_date: Option<NaiveDateTime>,
    pub estimated_delivery_date: Option<NaiveDateTime>,
    pub status: String,
}

impl Order {
    /// Calendar date of the purchase, timezone-naive
    pub fn purchase_date(&self) -> Option<NaiveDate> {
        self.purchase_timestamp.map(|ts| ts.date())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub order_id: String,
    /// Line sequence within the order, when the source carries it
    pub order_item_id: Option<String>,
    pub seller_id: String,
    pub product_id: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub seller_id: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub order_id: String,
    pub payment_sequential: Option<String>,
    pub payment_type: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: String,
    pub category: Option<String>,
}

/// Column names shared by both source shapes
pub mod columns {
    pub const ORDER_ID: &str = "order_id";
    pub const CUSTOMER_ID: &str = "customer_id";
    pub const ORDER_STATUS: &str = "order_status";
    pub const PURCHASE_TIMESTAMP: &str = "order_purchase_timestamp";
    pub const APPROVED_AT: &str = "order_approved_at";
    pub const DELIVERED_CARRIER_DATE: &str = "order_delivered_carrier_date";
    pub const DELIVERED_CUSTOMER_DATE: &str = "order_delivered_customer_date";
    pub const ESTIMATED_DELIVERY_DATE: &str = "order_estimated_delivery_date";

    pub const ORDER_ITEM_ID: &str = "order_item_id";
    pub const SELLER_ID: &str = "seller_id";
    pub const PRODUCT_ID: &str = "product_id";
    pub const PRICE: &str = "price";

    pub const CUSTOMER_CITY: &str = "customer_city";
    pub const CUSTOMER_STATE: &str = "customer_state";
    pub const SELLER_CITY: &str = "seller_city";
    pub const SELLER_STATE: &str = "seller_state";

    pub const PAYMENT_SEQUENTIAL: &str = "payment_sequential";
    pub const PAYMENT_TYPE: &str = "payment_type";
    pub const PAYMENT_VALUE: &str = "payment_value";

    pub const PRODUCT_CATEGORY: &str = "product_category_name";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_date_truncates_time() {
        let order = Order {
            order_id: "o1".to_string(),
            customer_id: "c1".to_string(),
            purchase_timestamp: NaiveDate::from_ymd_opt(2017, 10, 2)
                .and_then(|d| d.and_hms_opt(23, 59, 59)),
            approved_at: None,
            delivered_carrier_date: None,
            delivered_customer_date: None,
            estimated_delivery_date: None,
            status: "delivered".to_string(),
        };

        assert_eq!(order.purchase_date(), NaiveDate::from_ymd_opt(2017, 10, 2));
    }
}
