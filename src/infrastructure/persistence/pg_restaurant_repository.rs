//! PostgreSQL implementation of restaurant repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRestaurant, Restaurant};
use crate::domain::repositories::RestaurantRepository;
use crate::error::AppError;

/// PostgreSQL repository for restaurant storage and retrieval.
pub struct PgRestaurantRepository {
    pool: Arc<PgPool>,
}

impl PgRestaurantRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    address: String,
}

impl From<RestaurantRow> for Restaurant {
    fn from(r: RestaurantRow) -> Self {
        Restaurant::new(r.id, r.name, r.address)
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn create(&self, new_restaurant: NewRestaurant) -> Result<Restaurant, AppError> {
        let row = sqlx::query_as::<_, RestaurantRow>(
            r#"
            INSERT INTO restaurants (name, address)
            VALUES ($1, $2)
            RETURNING id, name, address
            "#,
        )
        .bind(&new_restaurant.name)
        .bind(&new_restaurant.address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        let row = sqlx::query_as::<_, RestaurantRow>(
            r#"
            SELECT id, name, address
            FROM restaurants
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Restaurant>, AppError> {
        let rows = sqlx::query_as::<_, RestaurantRow>(
            r#"
            SELECT id, name, address
            FROM restaurants
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        // Children first; the FK's ON DELETE CASCADE covers the same rows.
        sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
