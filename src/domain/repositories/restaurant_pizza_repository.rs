//! Repository trait for restaurant/pizza associations.

use crate::domain::entities::{NewRestaurantPizza, PizzaOffering, RestaurantPizzaDetail};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for priced restaurant/pizza associations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRestaurantPizzaRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_restaurant_pizza.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantPizzaRepository: Send + Sync {
    /// Inserts a new association and returns it with its restaurant and pizza.
    ///
    /// The insert and both parent lookups happen in one statement. The price is
    /// already validated by construction of [`NewRestaurantPizza`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the restaurant or pizza does not exist
    /// (foreign key violation).
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, new: NewRestaurantPizza) -> Result<RestaurantPizzaDetail, AppError>;

    /// Lists a restaurant's associations joined with their pizzas, ordered by
    /// association ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_restaurant(&self, restaurant_id: i64)
    -> Result<Vec<PizzaOffering>, AppError>;
}
