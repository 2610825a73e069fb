//! DTOs for the restaurant pizza creation endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::{pizza::PizzaSummary, restaurant::RestaurantSummary};
use crate::domain::entities::RestaurantPizzaDetail;
use crate::error::AppError;

/// Request body for `POST /restaurant_pizzas`.
///
/// Values stay untyped until every key is known to be present, so an absent
/// key is reported as missing even when another value has the wrong type.
/// The price range is enforced by the domain layer.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRestaurantPizzaRequest {
    #[validate(required)]
    pub price: Option<Value>,

    #[validate(required)]
    pub pizza_id: Option<Value>,

    #[validate(required)]
    pub restaurant_id: Option<Value>,
}

impl CreateRestaurantPizzaRequest {
    /// Runs the required-field check, then the type check, and returns
    /// `(price, pizza_id, restaurant_id)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingFields`] if any key is absent or `null`.
    /// Returns [`AppError::Validation`] if a value is not an integer.
    pub fn into_fields(self) -> Result<(i64, i64, i64), AppError> {
        self.validate()?;

        Ok((
            integer("price", self.price)?,
            integer("pizza_id", self.pizza_id)?,
            integer("restaurant_id", self.restaurant_id)?,
        ))
    }
}

fn integer(field: &str, value: Option<Value>) -> Result<i64, AppError> {
    match value {
        Some(value) => value.as_i64().ok_or_else(|| {
            AppError::validation(format!("{field} must be an integer, got {value}"))
        }),
        None => Err(AppError::missing_fields(vec![field.to_string()])),
    }
}

/// Response for a created association.
///
/// `pizza` and `restaurant` are summaries, so neither re-includes its
/// `restaurant_pizzas` list.
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaResponse {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl From<RestaurantPizzaDetail> for RestaurantPizzaResponse {
    fn from(d: RestaurantPizzaDetail) -> Self {
        Self {
            id: d.restaurant_pizza.id,
            price: d.restaurant_pizza.price,
            pizza_id: d.restaurant_pizza.pizza_id,
            restaurant_id: d.restaurant_pizza.restaurant_id,
            pizza: d.pizza.into(),
            restaurant: d.restaurant.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Pizza, Restaurant, RestaurantPizza};
    use serde_json::json;

    #[test]
    fn test_missing_keys_fail_required() {
        let request: CreateRestaurantPizzaRequest =
            serde_json::from_value(json!({ "price": 5, "pizza_id": 1 })).unwrap();

        let err = request.into_fields().unwrap_err();
        assert!(matches!(
            err,
            AppError::MissingFields { ref fields } if fields == &["restaurant_id".to_string()]
        ));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let request: CreateRestaurantPizzaRequest = serde_json::from_value(
            json!({ "price": null, "pizza_id": 1, "restaurant_id": 1 }),
        )
        .unwrap();

        assert!(matches!(
            request.into_fields(),
            Err(AppError::MissingFields { .. })
        ));
    }

    #[test]
    fn test_missing_key_reported_before_wrong_type() {
        let request: CreateRestaurantPizzaRequest =
            serde_json::from_value(json!({ "price": "five", "pizza_id": 1 })).unwrap();

        assert!(matches!(
            request.into_fields(),
            Err(AppError::MissingFields { ref fields }) if fields == &["restaurant_id".to_string()]
        ));
    }

    #[test]
    fn test_non_integer_values_fail_validation() {
        for price in [json!("five"), json!(5.5), json!(true), json!([5])] {
            let request: CreateRestaurantPizzaRequest = serde_json::from_value(
                json!({ "price": price, "pizza_id": 1, "restaurant_id": 2 }),
            )
            .unwrap();

            assert!(matches!(
                request.into_fields(),
                Err(AppError::Validation { .. })
            ));
        }
    }

    #[test]
    fn test_complete_request_passes() {
        let request: CreateRestaurantPizzaRequest = serde_json::from_value(
            json!({ "price": 50, "pizza_id": 1, "restaurant_id": 2 }),
        )
        .unwrap();

        // Range is not this DTO's concern.
        assert_eq!(request.into_fields().unwrap(), (50, 1, 2));
    }

    #[test]
    fn test_response_nests_parents_without_lists() {
        let detail = RestaurantPizzaDetail {
            restaurant_pizza: RestaurantPizza::new(7, 5, 3, 2),
            restaurant: Restaurant::new(3, "Kiki's Pizza".to_string(), "address3".to_string()),
            pizza: Pizza::new(2, "Geri".to_string(), "Dough, Tomato Sauce".to_string()),
        };

        let value = serde_json::to_value(RestaurantPizzaResponse::from(detail)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "price": 5,
                "pizza_id": 2,
                "restaurant_id": 3,
                "pizza": { "id": 2, "name": "Geri", "ingredients": "Dough, Tomato Sauce" },
                "restaurant": { "id": 3, "name": "Kiki's Pizza", "address": "address3" }
            })
        );
        assert!(value["pizza"].get("restaurant_pizzas").is_none());
        assert!(value["restaurant"].get("restaurant_pizzas").is_none());
    }
}
