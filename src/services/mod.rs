use actix_web::{get, web, HttpResponse, Responder};

use crate::types::StoreError;

pub mod messages;
pub mod models;
pub mod payloads;
pub mod store;
pub mod store_handling;
pub mod store_utils;

#[get("/")]
pub async fn home_page() -> impl Responder {
    HttpResponse::Ok().body("QuickEats backend service")
}

pub(crate) fn store_error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(msg) => HttpResponse::NotFound().json(msg),
        StoreError::Validation(msg) => HttpResponse::BadRequest().json(msg),
    }
}

pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home_page)
        .service(
            web::scope("/api/restaurants")
                .service(restaurants_route::fetch_restaurants)
                .service(restaurants_route::add_restaurant)
                .service(restaurants_route::view_menu)
                .service(restaurants_route::get_restaurant),
        )
        .service(
            web::scope("/api/menu")
                .service(menu_route::get_item)
                .service(menu_route::add_item),
        )
        .service(
            web::scope("/api/orders")
                .service(order_route::place_order)
                .service(order_route::get_order_by_number)
                .service(order_route::update_order_status)
                .service(order_route::get_order),
        )
        .service(web::scope("/test").service(test_route::healthcheck));
}

// sub-route "/api/restaurants"
pub mod restaurants_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{get, post, HttpResponse, Responder};

    use crate::services::messages::{AddRestaurant, FetchMenu, FetchRestaurant, FetchRestaurants};
    use crate::services::payloads::NewRestaurant;
    use crate::services::store_error_response;
    use crate::services::store_utils::AppState;

    #[get("")]
    pub async fn fetch_restaurants(state: Data<AppState>) -> impl Responder {
        match state.store.send(FetchRestaurants).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => store_error_response(err),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to fetch restaurants: {err}")),
        }
    }

    #[get("/{id}")]
    pub async fn get_restaurant(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.store.send(FetchRestaurant(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => store_error_response(err),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to fetch restaurant: {err}")),
        }
    }

    #[get("/{id}/menu")]
    pub async fn view_menu(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.store.send(FetchMenu(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => store_error_response(err),
            Err(err) => {
                HttpResponse::InternalServerError().json(format!("Unable to fetch menu: {err}"))
            }
        }
    }

    #[post("/add")]
    pub async fn add_restaurant(state: Data<AppState>, body: Json<NewRestaurant>) -> impl Responder {
        match state.store.send(AddRestaurant(body.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => store_error_response(err),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to insert new restaurant: {err}")),
        }
    }
}

// sub-route "/api/menu"
pub mod menu_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{get, post, HttpResponse, Responder};

    use crate::services::messages::{AddMenuItem, FetchMenuItem};
    use crate::services::payloads::NewMenuItem;
    use crate::services::store_error_response;
    use crate::services::store_utils::AppState;

    #[get("/item/{id}")]
    pub async fn get_item(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.store.send(FetchMenuItem(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => store_error_response(err),
            Err(err) => {
                HttpResponse::InternalServerError().json(format!("Unable to fetch menu item: {err}"))
            }
        }
    }

    #[post("/add")]
    pub async fn add_item(state: Data<AppState>, body: Json<NewMenuItem>) -> impl Responder {
        match state.store.send(AddMenuItem(body.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => store_error_response(err),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to insert new menu item: {err}")),
        }
    }
}

// sub-route "/api/orders"
pub mod order_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{get, patch, post, HttpResponse, Responder};
    use serde::Deserialize;

    use crate::services::messages::{FetchOrder, FetchOrderByNumber, PlaceOrder, UpdateOrderStatus};
    use crate::services::models::OrderStatus;
    use crate::services::payloads::NewOrder;
    use crate::services::store_error_response;
    use crate::services::store_utils::AppState;

    #[post("")]
    pub async fn place_order(state: Data<AppState>, body: Json<NewOrder>) -> impl Responder {
        match state.store.send(PlaceOrder(body.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => store_error_response(err),
            Err(err) => {
                HttpResponse::InternalServerError().json(format!("Unable to place order: {err}"))
            }
        }
    }

    #[get("/{id}")]
    pub async fn get_order(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.store.send(FetchOrder(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => store_error_response(err),
            Err(err) => {
                HttpResponse::InternalServerError().json(format!("Unable to fetch order: {err}"))
            }
        }
    }

    #[get("/number/{order_number}")]
    pub async fn get_order_by_number(state: Data<AppState>, path: Path<String>) -> impl Responder {
        match state.store.send(FetchOrderByNumber(path.into_inner())).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => store_error_response(err),
            Err(err) => {
                HttpResponse::InternalServerError().json(format!("Unable to fetch order: {err}"))
            }
        }
    }

    #[derive(Deserialize)]
    pub struct UpdateStatusBody {
        pub status: OrderStatus,
    }

    #[patch("/{id}/status")]
    pub async fn update_order_status(
        state: Data<AppState>,
        path: Path<i64>,
        body: Json<UpdateStatusBody>,
    ) -> impl Responder {
        let msg = UpdateOrderStatus {
            id: path.into_inner(),
            status: body.status,
        };

        match state.store.send(msg).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => store_error_response(err),
            Err(err) => HttpResponse::InternalServerError()
                .json(format!("Unable to update order status: {err}")),
        }
    }
}

// sub-route "/test"
pub mod test_route {
    use actix_web::{get, HttpResponse, Responder};

    #[get("/healthcheck")]
    pub async fn healthcheck() -> impl Responder {
        HttpResponse::Ok().body("I'm alive!")
    }
}
