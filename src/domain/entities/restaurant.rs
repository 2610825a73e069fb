//! Restaurant entity.

/// A restaurant that offers pizzas at its own prices.
///
/// Owns its [`super::RestaurantPizza`] rows: deleting a restaurant removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl Restaurant {
    /// Creates a new Restaurant instance.
    pub fn new(id: i64, name: String, address: String) -> Self {
        Self { id, name, address }
    }
}

/// Input data for creating a new restaurant.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_creation() {
        let restaurant = Restaurant::new(
            7,
            "Karen's Pizza Shack".to_string(),
            "address1".to_string(),
        );

        assert_eq!(restaurant.id, 7);
        assert_eq!(restaurant.name, "Karen's Pizza Shack");
        assert_eq!(restaurant.address, "address1");
    }
}
