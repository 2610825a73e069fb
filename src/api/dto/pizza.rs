//! Pizza response views.

use serde::Serialize;

use crate::domain::entities::Pizza;

/// Pizza scalars only. Used by `GET /pizzas` and wherever a pizza is nested.
#[derive(Debug, Serialize)]
pub struct PizzaSummary {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

impl From<Pizza> for PizzaSummary {
    fn from(p: Pizza) -> Self {
        Self {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}
