//! Handlers for restaurant endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::api::dto::restaurant::{RestaurantDetail, RestaurantSummary};
use crate::application::services::restaurant_service::RESTAURANT_NOT_FOUND;
use crate::error::AppError;
use crate::state::AppState;

/// A non-numeric id cannot name a restaurant.
fn restaurant_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::not_found(RESTAURANT_NOT_FOUND))
}

/// Lists all restaurants without their offerings.
///
/// # Endpoint
///
/// `GET /restaurants`
///
/// # Response
///
/// ```json
/// [{ "id": 1, "name": "Karen's Pizza Shack", "address": "address1" }]
/// ```
pub async fn restaurant_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, AppError> {
    let restaurants = state.restaurant_service.list_restaurants().await?;

    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}

/// Returns a restaurant with its offerings, each carrying its pizza.
///
/// # Endpoint
///
/// `GET /restaurants/{id}`
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "name": "Karen's Pizza Shack",
///   "address": "address1",
///   "restaurant_pizzas": [
///     {
///       "id": 1,
///       "price": 1,
///       "pizza_id": 1,
///       "restaurant_id": 1,
///       "pizza": { "id": 1, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese" }
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 `{"error": "Restaurant not found"}` if the id does not resolve.
pub async fn restaurant_detail_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RestaurantDetail>, AppError> {
    let id = restaurant_id(path)?;
    let menu = state.restaurant_service.get_restaurant(id).await?;

    Ok(Json(menu.into()))
}

/// Deletes a restaurant and all of its offerings.
///
/// # Endpoint
///
/// `DELETE /restaurants/{id}`
///
/// Returns 204 with an empty body.
///
/// # Errors
///
/// Returns 404 `{"error": "Restaurant not found"}` if the id does not resolve.
pub async fn delete_restaurant_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = restaurant_id(path)?;
    state.restaurant_service.delete_restaurant(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
