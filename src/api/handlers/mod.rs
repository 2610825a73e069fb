//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod index;
pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

pub use health::health_handler;
pub use index::index_handler;
pub use pizzas::pizza_list_handler;
pub use restaurant_pizzas::create_restaurant_pizza_handler;
pub use restaurants::{
    delete_restaurant_handler, restaurant_detail_handler, restaurant_list_handler,
};
