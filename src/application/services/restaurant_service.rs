//! Restaurant read and delete service.

use crate::domain::entities::{Restaurant, RestaurantMenu};
use crate::domain::repositories::{RestaurantPizzaRepository, RestaurantRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Message returned when a restaurant id does not resolve.
pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

/// Service for listing, inspecting and deleting restaurants.
pub struct RestaurantService<R: RestaurantRepository, O: RestaurantPizzaRepository> {
    restaurants: Arc<R>,
    offerings: Arc<O>,
}

impl<R: RestaurantRepository, O: RestaurantPizzaRepository> RestaurantService<R, O> {
    /// Creates a new restaurant service.
    pub fn new(restaurants: Arc<R>, offerings: Arc<O>) -> Self {
        Self {
            restaurants,
            offerings,
        }
    }

    /// Lists all restaurants in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        self.restaurants.list().await
    }

    /// Loads a restaurant with every pizza it offers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_restaurant(&self, id: i64) -> Result<RestaurantMenu, AppError> {
        let restaurant = self
            .restaurants
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESTAURANT_NOT_FOUND))?;

        let offerings = self.offerings.list_for_restaurant(restaurant.id).await?;

        Ok(RestaurantMenu {
            restaurant,
            offerings,
        })
    }

    /// Deletes a restaurant and all of its offerings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_restaurant(&self, id: i64) -> Result<(), AppError> {
        if !self.restaurants.delete(id).await? {
            return Err(AppError::not_found(RESTAURANT_NOT_FOUND));
        }

        tracing::info!(restaurant_id = id, "Restaurant deleted");
        Ok(())
    }
}
