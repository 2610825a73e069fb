//! Repository trait for restaurant data access.

use crate::domain::entities::{NewRestaurant, Restaurant};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing restaurants.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRestaurantRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_restaurant.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Creates a new restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_restaurant: NewRestaurant) -> Result<Restaurant, AppError>;

    /// Finds a restaurant by its database ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Restaurant))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError>;

    /// Lists all restaurants ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Restaurant>, AppError>;

    /// Deletes a restaurant together with all of its `restaurant_pizzas` rows
    /// in one transaction.
    ///
    /// Returns `Ok(true)` if the restaurant existed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
