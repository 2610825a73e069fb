//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and validation and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::restaurant_service::RestaurantService`] - Restaurant listing, detail and delete
//! - [`services::pizza_service::PizzaService`] - Pizza catalogue
//! - [`services::restaurant_pizza_service::RestaurantPizzaService`] - Validated association creation

pub mod services;
