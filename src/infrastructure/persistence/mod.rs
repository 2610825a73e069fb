//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through private `FromRow` row types.
//!
//! # Repositories
//!
//! - [`PgRestaurantRepository`] - Restaurants and cascading delete
//! - [`PgPizzaRepository`] - Pizzas
//! - [`PgRestaurantPizzaRepository`] - Priced associations

pub mod pg_pizza_repository;
pub mod pg_restaurant_pizza_repository;
pub mod pg_restaurant_repository;

pub use pg_pizza_repository::PgPizzaRepository;
pub use pg_restaurant_pizza_repository::PgRestaurantPizzaRepository;
pub use pg_restaurant_repository::PgRestaurantRepository;
