//! RestaurantPizza association entity: a pizza offered by a restaurant at a price.

use super::{Pizza, Restaurant};
use crate::domain::validation::{ValidationError, validate_price};

/// A price that has passed [`validate_price`].
///
/// [`NewRestaurantPizza`] can only be built from a `Price`, so an out-of-range
/// value never reaches a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(i64);

impl Price {
    /// Validates and wraps a raw price.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PriceOutOfRange`] outside `1..=30`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        validate_price(value).map(Self)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A stored restaurant/pizza association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

impl RestaurantPizza {
    /// Creates a new RestaurantPizza instance.
    pub fn new(id: i64, price: i64, restaurant_id: i64, pizza_id: i64) -> Self {
        Self {
            id,
            price,
            restaurant_id,
            pizza_id,
        }
    }
}

/// Input data for creating a new association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: Price,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

impl NewRestaurantPizza {
    /// Validates `price` and builds the insert payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the price is out of range.
    pub fn new(price: i64, restaurant_id: i64, pizza_id: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            price: Price::new(price)?,
            restaurant_id,
            pizza_id,
        })
    }
}

/// An association together with the pizza it prices.
///
/// Used for a restaurant's menu, where the owning restaurant is already known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaOffering {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
}

/// A restaurant with every offering it carries, ordered by association id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub offerings: Vec<PizzaOffering>,
}

/// A freshly created association with both parents resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizzaDetail {
    pub restaurant_pizza: RestaurantPizza,
    pub restaurant: Restaurant,
    pub pizza: Pizza,
}
