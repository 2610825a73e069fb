//! Pizza catalogue service.

use crate::domain::entities::Pizza;
use crate::domain::repositories::PizzaRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for reading the pizza catalogue.
pub struct PizzaService<P: PizzaRepository> {
    repository: Arc<P>,
}

impl<P: PizzaRepository> PizzaService<P> {
    /// Creates a new pizza service.
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Lists all pizzas in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, AppError> {
        self.repository.list().await
    }
}
