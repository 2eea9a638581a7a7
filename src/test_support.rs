//! Fixture builders shared by unit tests

use crate::model::{Customer, Order, OrderItem, Payment, Product, Seller};
use chrono::NaiveDate;

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn order(order_id: &str, customer_id: &str, purchased: &str) -> Order {
    Order {
        order_id: order_id.to_string(),
        customer_id: customer_id.to_string(),
        purchase_timestamp: date(purchased).and_hms_opt(12, 0, 0),
        approved_at: None,
        delivered_carrier_date: None,
        delivered_customer_date: None,
        estimated_delivery_date: None,
        status: "delivered".to_string(),
    }
}

pub fn item(order_id: &str, seller_id: &str, price: f64) -> OrderItem {
    OrderItem {
        order_id: order_id.to_string(),
        order_item_id: None,
        seller_id: seller_id.to_string(),
        product_id: format!("{}-product", seller_id),
        price,
    }
}

pub fn payment(order_id: &str, payment_type: &str, value: f64) -> Payment {
    Payment {
        order_id: order_id.to_string(),
        payment_sequential: None,
        payment_type: payment_type.to_string(),
        value,
    }
}

pub fn customer(customer_id: &str, city: &str) -> Customer {
    Customer {
        customer_id: customer_id.to_string(),
        city: city.to_string(),
        state: "SP".to_string(),
    }
}

pub fn seller(seller_id: &str, city: &str) -> Seller {
    Seller {
        seller_id: seller_id.to_string(),
        city: city.to_string(),
        state: "SP".to_string(),
    }
}

pub fn product(product_id: &str, category: &str) -> Product {
    Product {
        product_id: product_id.to_string(),
        category: Some(category.to_string()),
    }
}
