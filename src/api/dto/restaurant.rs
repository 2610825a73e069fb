//! Restaurant response views.
//!
//! Each view is a fixed shape. Nested objects use the summary views, which
//! carry no relationship fields, so a restaurant never serializes back into
//! its own offerings.

use serde::Serialize;

use super::pizza::PizzaSummary;
use crate::domain::entities::{PizzaOffering, Restaurant, RestaurantMenu};

/// Restaurant scalars only. Used by `GET /restaurants` and nested inside
/// association responses.
#[derive(Debug, Serialize)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

/// An offering as seen from its restaurant: no `restaurant` back-reference.
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaInRestaurant {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: PizzaSummary,
}

impl From<PizzaOffering> for RestaurantPizzaInRestaurant {
    fn from(o: PizzaOffering) -> Self {
        Self {
            id: o.restaurant_pizza.id,
            price: o.restaurant_pizza.price,
            pizza_id: o.restaurant_pizza.pizza_id,
            restaurant_id: o.restaurant_pizza.restaurant_id,
            pizza: o.pizza.into(),
        }
    }
}

/// Full restaurant view for `GET /restaurants/{id}`.
#[derive(Debug, Serialize)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaInRestaurant>,
}

impl From<RestaurantMenu> for RestaurantDetail {
    fn from(menu: RestaurantMenu) -> Self {
        Self {
            id: menu.restaurant.id,
            name: menu.restaurant.name,
            address: menu.restaurant.address,
            restaurant_pizzas: menu.offerings.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Pizza, RestaurantPizza};
    use serde_json::{Value, json};

    fn keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_summary_has_only_scalars() {
        let summary = RestaurantSummary::from(Restaurant::new(
            1,
            "Sanjay's Pizza".to_string(),
            "address2".to_string(),
        ));

        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(keys(&value), ["address", "id", "name"]);
    }

    #[test]
    fn test_detail_nests_pizza_without_back_reference() {
        let menu = RestaurantMenu {
            restaurant: Restaurant::new(1, "Karen's".to_string(), "address1".to_string()),
            offerings: vec![PizzaOffering {
                restaurant_pizza: RestaurantPizza::new(4, 12, 1, 2),
                pizza: Pizza::new(2, "Geri".to_string(), "Dough, Spinach".to_string()),
            }],
        };

        let value = serde_json::to_value(RestaurantDetail::from(menu)).unwrap();

        assert_eq!(keys(&value), ["address", "id", "name", "restaurant_pizzas"]);

        let item = &value["restaurant_pizzas"][0];
        assert_eq!(keys(item), ["id", "pizza", "pizza_id", "price", "restaurant_id"]);
        assert_eq!(
            item["pizza"],
            json!({ "id": 2, "name": "Geri", "ingredients": "Dough, Spinach" })
        );
    }

    #[test]
    fn test_detail_without_offerings() {
        let menu = RestaurantMenu {
            restaurant: Restaurant::new(9, "Empty".to_string(), "nowhere".to_string()),
            offerings: vec![],
        };

        let value = serde_json::to_value(RestaurantDetail::from(menu)).unwrap();
        assert_eq!(value["restaurant_pizzas"], json!([]));
    }
}
