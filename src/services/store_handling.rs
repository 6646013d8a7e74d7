use actix::Handler;

use crate::services::messages::{
    AddMenuItem, AddRestaurant, FetchMenu, FetchMenuItem, FetchOrder, FetchOrderByNumber,
    FetchRestaurant, FetchRestaurants, PlaceOrder, UpdateOrderStatus,
};
use crate::services::models::{MenuItem, Order, Restaurant};
use crate::services::store_utils::StoreActor;
use crate::types::StoreResult;

impl Handler<FetchRestaurants> for StoreActor {
    type Result = StoreResult<Vec<Restaurant>>;

    fn handle(&mut self, _msg: FetchRestaurants, _ctx: &mut Self::Context) -> Self::Result {
        Ok(self.store().list_restaurants())
    }
}

impl Handler<FetchRestaurant> for StoreActor {
    type Result = StoreResult<Restaurant>;

    fn handle(&mut self, msg: FetchRestaurant, _ctx: &mut Self::Context) -> Self::Result {
        self.store().get_restaurant(msg.0)
    }
}

impl Handler<AddRestaurant> for StoreActor {
    type Result = StoreResult<Restaurant>;

    fn handle(&mut self, msg: AddRestaurant, _ctx: &mut Self::Context) -> Self::Result {
        Ok(self.store().create_restaurant(msg.0))
    }
}

impl Handler<FetchMenu> for StoreActor {
    type Result = StoreResult<Vec<MenuItem>>;

    fn handle(&mut self, msg: FetchMenu, _ctx: &mut Self::Context) -> Self::Result {
        Ok(self.store().list_menu_by_restaurant(msg.0))
    }
}

impl Handler<FetchMenuItem> for StoreActor {
    type Result = StoreResult<MenuItem>;

    fn handle(&mut self, msg: FetchMenuItem, _ctx: &mut Self::Context) -> Self::Result {
        self.store().get_menu_item(msg.0)
    }
}

impl Handler<AddMenuItem> for StoreActor {
    type Result = StoreResult<MenuItem>;

    fn handle(&mut self, msg: AddMenuItem, _ctx: &mut Self::Context) -> Self::Result {
        self.store().create_menu_item(msg.0)
    }
}

impl Handler<PlaceOrder> for StoreActor {
    type Result = StoreResult<Order>;

    fn handle(&mut self, msg: PlaceOrder, _ctx: &mut Self::Context) -> Self::Result {
        self.store().create_order(msg.0)
    }
}

impl Handler<FetchOrder> for StoreActor {
    type Result = StoreResult<Order>;

    fn handle(&mut self, msg: FetchOrder, _ctx: &mut Self::Context) -> Self::Result {
        self.store().get_order(msg.0)
    }
}

impl Handler<FetchOrderByNumber> for StoreActor {
    type Result = StoreResult<Order>;

    fn handle(&mut self, msg: FetchOrderByNumber, _ctx: &mut Self::Context) -> Self::Result {
        self.store().get_order_by_number(&msg.0)
    }
}

impl Handler<UpdateOrderStatus> for StoreActor {
    type Result = StoreResult<Order>;

    fn handle(&mut self, msg: UpdateOrderStatus, _ctx: &mut Self::Context) -> Self::Result {
        self.store().update_order_status(msg.id, msg.status)
    }
}
