//! Service creating priced restaurant/pizza associations.

use crate::domain::entities::{NewRestaurantPizza, RestaurantPizzaDetail};
use crate::domain::repositories::RestaurantPizzaRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for adding a pizza to a restaurant's menu.
///
/// The price is validated before any repository call. Unknown restaurant or
/// pizza ids are rejected by the database foreign keys.
pub struct RestaurantPizzaService<O>
where
    O: RestaurantPizzaRepository,
{
    offerings: Arc<O>,
}

impl<O> RestaurantPizzaService<O>
where
    O: RestaurantPizzaRepository,
{
    /// Creates a new association service.
    pub fn new(offerings: Arc<O>) -> Self {
        Self { offerings }
    }

    /// Validates and stores a new association, returned with both parents.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `price` is outside `1..=30` or a
    /// referenced row does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_restaurant_pizza(
        &self,
        price: i64,
        pizza_id: i64,
        restaurant_id: i64,
    ) -> Result<RestaurantPizzaDetail, AppError> {
        let new = NewRestaurantPizza::new(price, restaurant_id, pizza_id)?;

        let detail = self.offerings.create(new).await?;

        tracing::info!(
            restaurant_pizza_id = detail.restaurant_pizza.id,
            restaurant_id,
            pizza_id,
            price,
            "Restaurant pizza created"
        );

        Ok(detail)
    }
}
