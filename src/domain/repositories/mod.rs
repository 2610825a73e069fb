//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`RestaurantRepository`] - Restaurant lookups and cascading delete
//! - [`PizzaRepository`] - Pizza lookups
//! - [`RestaurantPizzaRepository`] - Priced associations
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod pizza_repository;
pub mod restaurant_pizza_repository;
pub mod restaurant_repository;

pub use pizza_repository::PizzaRepository;
pub use restaurant_pizza_repository::RestaurantPizzaRepository;
pub use restaurant_repository::RestaurantRepository;

#[cfg(test)]
pub use pizza_repository::MockPizzaRepository;
#[cfg(test)]
pub use restaurant_pizza_repository::MockRestaurantPizzaRepository;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
