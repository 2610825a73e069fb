//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and formats responses through
//! fixed serialization views.
//!
//! # Modules
//!
//! - [`dto`] - Request DTOs and response views
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
