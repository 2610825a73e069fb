//! Repository trait for pizza data access.

use crate::domain::entities::{NewPizza, Pizza};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing pizzas.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPizzaRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PizzaRepository: Send + Sync {
    /// Creates a new pizza.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_pizza: NewPizza) -> Result<Pizza, AppError>;

    /// Finds a pizza by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Pizza>, AppError>;

    /// Lists all pizzas ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Pizza>, AppError>;
}
