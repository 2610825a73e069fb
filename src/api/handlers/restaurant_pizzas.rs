//! Handler for creating restaurant pizzas.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::restaurant_pizza::{CreateRestaurantPizzaRequest, RestaurantPizzaResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Adds a pizza to a restaurant's menu at a price.
///
/// # Endpoint
///
/// `POST /restaurant_pizzas`
///
/// # Request Body
///
/// ```json
/// { "price": 5, "pizza_id": 1, "restaurant_id": 3 }
/// ```
///
/// # Response
///
/// 201 with the association, its `pizza` and its `restaurant`. The nested
/// objects do not include `restaurant_pizzas`.
///
/// # Errors
///
/// - 400 `{"errors": ["missing fields"]}` if a key is absent or `null`
/// - 400 `{"errors": ["validation errors"]}` if the body is malformed, a value
///   has the wrong type, the price is outside `1..=30`, or the restaurant or
///   pizza does not exist
pub async fn create_restaurant_pizza_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    let (price, pizza_id, restaurant_id) = payload.into_fields()?;

    let created = state
        .restaurant_pizza_service
        .create_restaurant_pizza(price, pizza_id, restaurant_id)
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
