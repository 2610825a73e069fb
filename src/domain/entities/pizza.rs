//! Pizza entity.

/// A pizza recipe, priced per restaurant through [`super::RestaurantPizza`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

impl Pizza {
    /// Creates a new Pizza instance.
    pub fn new(id: i64, name: String, ingredients: String) -> Self {
        Self {
            id,
            name,
            ingredients,
        }
    }
}

/// Input data for creating a new pizza.
#[derive(Debug, Clone)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}
