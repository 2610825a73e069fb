#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use pizza_restaurants::routes::router;
use pizza_restaurants::state::AppState;

pub async fn create_test_restaurant(pool: &PgPool, name: &str, address: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO restaurants (name, address) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(address)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_pizza(pool: &PgPool, name: &str, ingredients: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO pizzas (name, ingredients) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(ingredients)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_offering(
    pool: &PgPool,
    restaurant_id: i64,
    pizza_id: i64,
    price: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(price)
    .bind(restaurant_id)
    .bind(pizza_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_offerings_for(pool: &PgPool, restaurant_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = $1")
        .bind(restaurant_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_offerings(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}
