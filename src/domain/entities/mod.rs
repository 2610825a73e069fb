//! Core domain entities representing the restaurant/pizza data model.
//!
//! Entities are plain data structures without persistence concerns.
//!
//! # Entity Types
//!
//! - [`Restaurant`] - A restaurant with a name and address
//! - [`Pizza`] - A pizza with its ingredients
//! - [`RestaurantPizza`] - A pizza offered by a restaurant at a validated price
//!
//! # Design Pattern
//!
//! Separate structs are used for creation (`NewRestaurant`, `NewPizza`,
//! `NewRestaurantPizza`). Composite read models (`RestaurantMenu`,
//! `RestaurantPizzaDetail`) hold resolved relationships one level deep.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::{NewPizza, Pizza};
pub use restaurant::{NewRestaurant, Restaurant};
pub use restaurant_pizza::{
    NewRestaurantPizza, PizzaOffering, Price, RestaurantMenu, RestaurantPizza,
    RestaurantPizzaDetail,
};
