use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{test, App};
use serde_json::json;

use crate::services;
use crate::services::store_utils::{start_store, AppState};

fn order_payload() -> serde_json::Value {
    // Shape of the cart submission the web client sends, including the
    // redundant "status" field the server ignores.
    json!({
        "restaurantId": 1,
        "items": [
            { "id": 3, "name": "Butter Chicken", "price": 380, "quantity": 1, "image": "https://example.com/butter-chicken.jpg" },
            { "id": 5, "name": "Dal Tadka", "price": 220, "quantity": 1, "image": "https://example.com/dal-tadka.jpg" }
        ],
        "subtotal": 600,
        "deliveryFee": 40,
        "total": 640,
        "status": "confirmed",
        "customerName": "Asha Rao",
        "customerPhone": "9876543210",
        "deliveryAddress": "7 Mission St, San Francisco"
    })
}

macro_rules! spawn_app {
    () => {
        test::init_service(
            App::new()
                .app_data(Data::new(AppState { store: start_store() }))
                .configure(services::api_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn healthcheck_responds() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/test/healthcheck").to_request(),
    )
    .await;

    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn lists_the_seeded_restaurants() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/restaurants").to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let restaurants = body.as_array().expect("array of restaurants");

    assert_eq!(restaurants.len(), 4);
    assert!(restaurants.iter().all(|r| r["isActive"] == json!(true)));
    assert_eq!(restaurants[0]["name"], json!("Spice Garden"));
}

#[actix_web::test]
async fn fetches_one_restaurant_or_404() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/restaurants/1").to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let restaurant: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(restaurant["name"], json!("Spice Garden"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/restaurants/99").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn serves_the_restaurant_menu() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/restaurants/1/menu")
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let menu = body.as_array().expect("array of menu items");

    assert_eq!(menu.len(), 6);
    assert!(menu
        .iter()
        .all(|item| item["restaurantId"] == json!(1) && item["isAvailable"] == json!(true)));
}

#[actix_web::test]
async fn places_tracks_and_advances_an_order() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_payload())
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let order: serde_json::Value = test::read_body_json(resp).await;
    let number = order["orderNumber"].as_str().expect("order number");
    assert!(number.starts_with("QE"));
    assert_eq!(number.len(), 7);
    assert_eq!(order["total"], json!(640));
    assert_eq!(order["status"], json!("confirmed"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/orders/number/{number}"))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let fetched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fetched, order);

    let id = order["id"].as_i64().expect("order id");
    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/orders/{id}/status"))
            .set_json(json!({ "status": "preparing" }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["status"], json!("preparing"));
    assert_eq!(updated["orderNumber"], order["orderNumber"]);
}

#[actix_web::test]
async fn rejects_an_order_with_mismatched_total() {
    let app = spawn_app!();

    let mut payload = order_payload();
    payload["total"] = json!(600);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/orders")
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unknown_order_number_is_a_404_not_a_fault() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/orders/number/QE00000")
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn rejects_unlisted_and_backward_statuses() {
    let app = spawn_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/api/orders/1/status")
            .set_json(json!({ "status": "returned_to_sender" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/orders")
            .set_json(order_payload())
            .to_request(),
    )
    .await;
    let order: serde_json::Value = test::read_body_json(resp).await;
    let id = order["id"].as_i64().expect("order id");

    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/orders/{id}/status"))
            .set_json(json!({ "status": "delivered" }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/orders/{id}/status"))
            .set_json(json!({ "status": "preparing" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delivery_fee_defaults_when_omitted() {
    let app = spawn_app!();

    let mut payload = order_payload();
    payload.as_object_mut().expect("object").remove("deliveryFee");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/orders")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let order: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(order["deliveryFee"], json!(40));
    assert_eq!(order["total"], json!(640));
}
