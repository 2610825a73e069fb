//! PostgreSQL implementation of the restaurant/pizza association repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    NewRestaurantPizza, Pizza, PizzaOffering, Restaurant, RestaurantPizza, RestaurantPizzaDetail,
};
use crate::domain::repositories::RestaurantPizzaRepository;
use crate::error::AppError;

/// PostgreSQL repository for priced associations.
///
/// Foreign key violations on insert surface as [`AppError::Validation`]
/// through `From<sqlx::Error>`.
pub struct PgRestaurantPizzaRepository {
    pool: Arc<PgPool>,
}

impl PgRestaurantPizzaRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CreatedRow {
    id: i64,
    price: i64,
    restaurant_id: i64,
    pizza_id: i64,
    restaurant_name: String,
    restaurant_address: String,
    pizza_name: String,
    pizza_ingredients: String,
}

impl From<CreatedRow> for RestaurantPizzaDetail {
    fn from(r: CreatedRow) -> Self {
        RestaurantPizzaDetail {
            restaurant_pizza: RestaurantPizza::new(r.id, r.price, r.restaurant_id, r.pizza_id),
            restaurant: Restaurant::new(r.restaurant_id, r.restaurant_name, r.restaurant_address),
            pizza: Pizza::new(r.pizza_id, r.pizza_name, r.pizza_ingredients),
        }
    }
}

#[derive(sqlx::FromRow)]
struct OfferingRow {
    id: i64,
    price: i64,
    restaurant_id: i64,
    pizza_id: i64,
    pizza_name: String,
    pizza_ingredients: String,
}

impl From<OfferingRow> for PizzaOffering {
    fn from(r: OfferingRow) -> Self {
        PizzaOffering {
            restaurant_pizza: RestaurantPizza::new(r.id, r.price, r.restaurant_id, r.pizza_id),
            pizza: Pizza::new(r.pizza_id, r.pizza_name, r.pizza_ingredients),
        }
    }
}

#[async_trait]
impl RestaurantPizzaRepository for PgRestaurantPizzaRepository {
    async fn create(&self, new: NewRestaurantPizza) -> Result<RestaurantPizzaDetail, AppError> {
        // Foreign keys are checked after the row is produced, so the result
        // is read to completion for a violation to surface.
        let rows = sqlx::query_as::<_, CreatedRow>(
            r#"
            WITH ins AS (
                INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id)
                VALUES ($1, $2, $3)
                RETURNING id, price, restaurant_id, pizza_id
            )
            SELECT
                ins.id,
                ins.price,
                ins.restaurant_id,
                ins.pizza_id,
                r.name AS restaurant_name,
                r.address AS restaurant_address,
                p.name AS pizza_name,
                p.ingredients AS pizza_ingredients
            FROM ins
            JOIN restaurants r ON r.id = ins.restaurant_id
            JOIN pizzas p ON p.id = ins.pizza_id
            "#,
        )
        .bind(new.price.value())
        .bind(new.restaurant_id)
        .bind(new.pizza_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter()
            .next()
            .map(Into::into)
            .ok_or_else(|| AppError::internal("Insert returned no row"))
    }

    async fn list_for_restaurant(
        &self,
        restaurant_id: i64,
    ) -> Result<Vec<PizzaOffering>, AppError> {
        let rows = sqlx::query_as::<_, OfferingRow>(
            r#"
            SELECT
                rp.id,
                rp.price,
                rp.restaurant_id,
                rp.pizza_id,
                p.name AS pizza_name,
                p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = $1
            ORDER BY rp.id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
