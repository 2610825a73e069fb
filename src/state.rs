//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{PizzaService, RestaurantPizzaService, RestaurantService};
use crate::infrastructure::persistence::{
    PgPizzaRepository, PgRestaurantPizzaRepository, PgRestaurantRepository,
};

pub type AppRestaurantService =
    RestaurantService<PgRestaurantRepository, PgRestaurantPizzaRepository>;
pub type AppPizzaService = PizzaService<PgPizzaRepository>;
pub type AppRestaurantPizzaService = RestaurantPizzaService<PgRestaurantPizzaRepository>;

/// Cheap to clone: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub restaurant_service: Arc<AppRestaurantService>,
    pub pizza_service: Arc<AppPizzaService>,
    pub restaurant_pizza_service: Arc<AppRestaurantPizzaService>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires PostgreSQL repositories into the services.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let restaurant_repo = Arc::new(PgRestaurantRepository::new(pool.clone()));
        let pizza_repo = Arc::new(PgPizzaRepository::new(pool.clone()));
        let offering_repo = Arc::new(PgRestaurantPizzaRepository::new(pool.clone()));

        Self {
            restaurant_service: Arc::new(RestaurantService::new(
                restaurant_repo,
                offering_repo.clone(),
            )),
            pizza_service: Arc::new(PizzaService::new(pizza_repo)),
            restaurant_pizza_service: Arc::new(RestaurantPizzaService::new(offering_repo)),
            db: pool,
        }
    }
}
