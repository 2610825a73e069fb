//! PostgreSQL implementation of pizza repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPizza, Pizza};
use crate::domain::repositories::PizzaRepository;
use crate::error::AppError;

/// PostgreSQL repository for pizzas.
pub struct PgPizzaRepository {
    pool: Arc<PgPool>,
}

impl PgPizzaRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PizzaRow {
    id: i64,
    name: String,
    ingredients: String,
}

impl From<PizzaRow> for Pizza {
    fn from(r: PizzaRow) -> Self {
        Pizza::new(r.id, r.name, r.ingredients)
    }
}

#[async_trait]
impl PizzaRepository for PgPizzaRepository {
    async fn create(&self, new_pizza: NewPizza) -> Result<Pizza, AppError> {
        let row = sqlx::query_as::<_, PizzaRow>(
            r#"
            INSERT INTO pizzas (name, ingredients)
            VALUES ($1, $2)
            RETURNING id, name, ingredients
            "#,
        )
        .bind(&new_pizza.name)
        .bind(&new_pizza.ingredients)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pizza>, AppError> {
        let row = sqlx::query_as::<_, PizzaRow>(
            "SELECT id, name, ingredients FROM pizzas WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Pizza>, AppError> {
        let rows = sqlx::query_as::<_, PizzaRow>(
            "SELECT id, name, ingredients FROM pizzas ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
