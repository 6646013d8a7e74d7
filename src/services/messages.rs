use actix::Message;

use crate::services::models::{MenuItem, Order, OrderStatus, Restaurant};
use crate::services::payloads::{NewMenuItem, NewOrder, NewRestaurant};
use crate::types::StoreResult;

#[derive(Message)]
#[rtype(result = "StoreResult<Vec<Restaurant>>")]
pub struct FetchRestaurants;

#[derive(Message)]
#[rtype(result = "StoreResult<Restaurant>")]
pub struct FetchRestaurant(pub i64);

#[derive(Message)]
#[rtype(result = "StoreResult<Restaurant>")]
pub struct AddRestaurant(pub NewRestaurant);

#[derive(Message)]
#[rtype(result = "StoreResult<Vec<MenuItem>>")]
pub struct FetchMenu(pub i64);

#[derive(Message)]
#[rtype(result = "StoreResult<MenuItem>")]
pub struct FetchMenuItem(pub i64);

#[derive(Message)]
#[rtype(result = "StoreResult<MenuItem>")]
pub struct AddMenuItem(pub NewMenuItem);

#[derive(Message)]
#[rtype(result = "StoreResult<Order>")]
pub struct PlaceOrder(pub NewOrder);

#[derive(Message)]
#[rtype(result = "StoreResult<Order>")]
pub struct FetchOrder(pub i64);

#[derive(Message)]
#[rtype(result = "StoreResult<Order>")]
pub struct FetchOrderByNumber(pub String);

#[derive(Message)]
#[rtype(result = "StoreResult<Order>")]
pub struct UpdateOrderStatus {
    pub id: i64,
    pub status: OrderStatus,
}
