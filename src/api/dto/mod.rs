//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs are the serialization views: one fixed, depth-limited shape
//! per endpoint, built from domain entities via `From`. Request DTOs use
//! `validator` for required-field checks.

pub mod health;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
