//! Handler for the pizza catalogue.

use axum::{Json, extract::State};

use crate::api::dto::pizza::PizzaSummary;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all pizzas.
///
/// # Endpoint
///
/// `GET /pizzas`
///
/// Each item has exactly `id`, `name` and `ingredients`.
pub async fn pizza_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaSummary>>, AppError> {
    let pizzas = state.pizza_service.list_pizzas().await?;

    Ok(Json(pizzas.into_iter().map(Into::into).collect()))
}
