use serde::{Deserialize, Serialize};

use crate::services::models::OrderLineItem;

pub const DELIVERY_FEE: i32 = 40;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRestaurant {
    pub name: String,
    pub cuisine: String,
    pub rating: String,
    pub delivery_time: String,
    pub price_for_two: i32,
    pub image: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub restaurant_id: i64,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: String,
    pub image: String,
    pub is_veg: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub restaurant_id: i64,
    pub items: Vec<OrderLineItem>,
    pub subtotal: i32,
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: i32,
    pub total: i32,
    pub delivery_address: String,
    pub customer_name: String,
    pub customer_phone: String,
}

fn default_delivery_fee() -> i32 {
    DELIVERY_FEE
}
