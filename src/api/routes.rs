//! API route configuration.

use crate::api::handlers::{
    create_restaurant_pizza_handler, delete_restaurant_handler, pizza_list_handler,
    restaurant_detail_handler, restaurant_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Resource routes.
///
/// # Endpoints
///
/// - `GET    /restaurants`        - List restaurants (scalars only)
/// - `GET    /restaurants/{id}`   - Restaurant with its offerings
/// - `DELETE /restaurants/{id}`   - Delete restaurant and its offerings
/// - `GET    /pizzas`             - List pizzas
/// - `POST   /restaurant_pizzas`  - Offer a pizza at a restaurant
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(restaurant_list_handler))
        .route(
            "/restaurants/{id}",
            get(restaurant_detail_handler).delete(delete_restaurant_handler),
        )
        .route("/pizzas", get(pizza_list_handler))
        .route("/restaurant_pizzas", post(create_restaurant_pizza_handler))
}
