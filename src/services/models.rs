use chrono::{serde::ts_seconds, DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub rating: String,
    pub delivery_time: String,
    pub price_for_two: i32,
    pub image: String,
    pub address: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category: String,
    pub image: String,
    pub is_veg: bool,
    pub is_available: bool,
}

// Snapshot of a menu item at order time. Copied by value so later menu
// edits never touch placed orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub quantity: i32,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub restaurant_id: i64,
    pub items: Vec<OrderLineItem>,
    pub subtotal: i32,
    pub delivery_fee: i32,
    pub total: i32,
    pub status: OrderStatus,
    pub delivery_address: String,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(with = "ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    fn stage(&self) -> u8 {
        match self {
            OrderStatus::Confirmed => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::OutForDelivery => 2,
            OrderStatus::Delivered => 3,
        }
    }

    // Statuses only ever move forward through the delivery timeline.
    pub fn can_advance_to(&self, next: OrderStatus) -> bool {
        next.stage() > self.stage()
    }
}
