mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use pizza_restaurants::routes::app_router;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_restaurants_list_returns_scalars_only(pool: PgPool) {
    let karen = common::create_test_restaurant(&pool, "Karen's Pizza Shack", "address1").await;
    let sanjay = common::create_test_restaurant(&pool, "Sanjay's Pizza", "address2").await;
    let pizza = common::create_test_pizza(&pool, "Emma", "Dough, Tomato Sauce, Cheese").await;
    common::create_test_offering(&pool, karen, pizza, 5).await;

    let server = common::make_server(pool);

    let response = server.get("/restaurants").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(
        body,
        json!([
            { "id": karen, "name": "Karen's Pizza Shack", "address": "address1" },
            { "id": sanjay, "name": "Sanjay's Pizza", "address": "address2" }
        ])
    );
}

#[sqlx::test]
async fn test_restaurants_list_empty(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/restaurants").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[sqlx::test]
async fn test_restaurants_list_trailing_slash(pool: PgPool) {
    common::create_test_restaurant(&pool, "Kiki's Pizza", "address3").await;
    let app = app_router(common::create_test_state(pool));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/restaurants/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

// ─── DETAIL ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_restaurant_detail_includes_offerings_with_pizza(pool: PgPool) {
    let id = common::create_test_restaurant(&pool, "Karen's Pizza Shack", "address1").await;
    let emma = common::create_test_pizza(&pool, "Emma", "Dough, Tomato Sauce, Cheese").await;
    let geri = common::create_test_pizza(&pool, "Geri", "Dough, Pepperoni").await;
    let first = common::create_test_offering(&pool, id, emma, 1).await;
    let second = common::create_test_offering(&pool, id, geri, 30).await;

    let server = common::make_server(pool);

    let response = server.get(&format!("/restaurants/{id}")).await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Karen's Pizza Shack");
    assert_eq!(body["address"], "address1");

    let items = body["restaurant_pizzas"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    assert_eq!(
        items[0],
        json!({
            "id": first,
            "price": 1,
            "pizza_id": emma,
            "restaurant_id": id,
            "pizza": { "id": emma, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese" }
        })
    );
    assert_eq!(items[1]["id"], second);
    assert_eq!(items[1]["price"], 30);

    for item in items {
        assert!(item.get("restaurant").is_none());
        assert!(item["pizza"].get("restaurant_pizzas").is_none());
    }
}

#[sqlx::test]
async fn test_restaurant_detail_round_trip(pool: PgPool) {
    let id = common::create_test_restaurant(&pool, "Sanjay's Pizza", "address2").await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/restaurants/{id}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": id,
            "name": "Sanjay's Pizza",
            "address": "address2",
            "restaurant_pizzas": []
        })
    );
}

#[sqlx::test]
async fn test_restaurant_detail_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/restaurants/9999999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Restaurant not found" })
    );
}

#[sqlx::test]
async fn test_restaurant_detail_non_numeric_id(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/restaurants/abc").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Restaurant not found" })
    );
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_restaurant_cascades(pool: PgPool) {
    let doomed = common::create_test_restaurant(&pool, "Doomed", "address1").await;
    let survivor = common::create_test_restaurant(&pool, "Survivor", "address2").await;
    let pizza = common::create_test_pizza(&pool, "Emma", "Dough").await;
    common::create_test_offering(&pool, doomed, pizza, 5).await;
    common::create_test_offering(&pool, doomed, pizza, 6).await;
    common::create_test_offering(&pool, survivor, pizza, 7).await;

    let server = common::make_server(pool.clone());

    let response = server.delete(&format!("/restaurants/{doomed}")).await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    assert_eq!(common::count_offerings_for(&pool, doomed).await, 0);
    assert_eq!(common::count_offerings_for(&pool, survivor).await, 1);

    server
        .get(&format!("/restaurants/{doomed}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // Pizzas are not owned by restaurants.
    let pizzas = server.get("/pizzas").await.json::<Value>();
    assert_eq!(pizzas.as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_delete_restaurant_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.delete("/restaurants/9999999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Restaurant not found" })
    );
}

#[sqlx::test]
async fn test_delete_restaurant_twice(pool: PgPool) {
    let id = common::create_test_restaurant(&pool, "Once", "address1").await;
    let server = common::make_server(pool);

    server
        .delete(&format!("/restaurants/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .delete(&format!("/restaurants/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
