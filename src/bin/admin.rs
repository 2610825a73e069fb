//! CLI administration tool for pizza-restaurants.
//!
//! Seeds sample data, shows table counts and checks the database without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Insert sample restaurants, pizzas and offerings
//! cargo run --bin admin -- seed
//!
//! # Wipe all tables first (asks for confirmation)
//! cargo run --bin admin -- seed --reset
//!
//! # View row counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_URI` (required): PostgreSQL connection string

use pizza_restaurants::application::services::RestaurantPizzaService;
use pizza_restaurants::domain::entities::{NewPizza, NewRestaurant};
use pizza_restaurants::domain::repositories::{PizzaRepository, RestaurantRepository};
use pizza_restaurants::infrastructure::persistence::{
    PgPizzaRepository, PgRestaurantPizzaRepository, PgRestaurantRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing pizza-restaurants.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Insert sample restaurants, pizzas and offerings
    Seed {
        /// Delete all existing rows first
        #[arg(long)]
        reset: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

const SAMPLE_RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const SAMPLE_PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// `(restaurant index, pizza index, price)` into the sample tables above.
const SAMPLE_OFFERINGS: &[(usize, usize, i64)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL")
        .or_else(|_| std::env::var("DB_URI"))
        .context("DATABASE_URL or DB_URI must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Seed { reset, yes } => seed(&pool, reset, yes).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Seeds sample data through the repositories.
///
/// Offerings go through [`RestaurantPizzaService`], so sample prices are
/// validated exactly like API input.
async fn seed(pool: &PgPool, reset: bool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🍕 Seeding database".bright_blue().bold());
    println!();

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    if reset {
        let confirmed = skip_confirm
            || Confirm::new()
                .with_prompt("Delete ALL restaurants, pizzas and offerings?")
                .default(false)
                .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }

        sqlx::query("TRUNCATE restaurant_pizzas, restaurants, pizzas RESTART IDENTITY")
            .execute(pool)
            .await?;
        println!("{}", "🗑  Existing data removed".yellow());
    }

    let pool = Arc::new(pool.clone());
    let restaurant_repo = Arc::new(PgRestaurantRepository::new(pool.clone()));
    let pizza_repo = Arc::new(PgPizzaRepository::new(pool.clone()));
    let offering_repo = Arc::new(PgRestaurantPizzaRepository::new(pool));

    let mut restaurants = Vec::with_capacity(SAMPLE_RESTAURANTS.len());
    for (name, address) in SAMPLE_RESTAURANTS {
        let restaurant = restaurant_repo
            .create(NewRestaurant {
                name: name.to_string(),
                address: address.to_string(),
            })
            .await?;
        println!("  Restaurant #{} {}", restaurant.id, restaurant.name.bright_white());
        restaurants.push(restaurant);
    }

    let mut pizzas = Vec::with_capacity(SAMPLE_PIZZAS.len());
    for (name, ingredients) in SAMPLE_PIZZAS {
        let pizza = pizza_repo
            .create(NewPizza {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            })
            .await?;
        println!("  Pizza #{} {}", pizza.id, pizza.name.bright_white());
        pizzas.push(pizza);
    }

    let service = RestaurantPizzaService::new(offering_repo);
    for &(r, p, price) in SAMPLE_OFFERINGS {
        let detail = service
            .create_restaurant_pizza(price, pizzas[p].id, restaurants[r].id)
            .await?;
        println!(
            "  {} serves {} for ${}",
            detail.restaurant.name.bright_white(),
            detail.pizza.name.bright_white(),
            detail.restaurant_pizza.price.to_string().bright_green()
        );
    }

    println!();
    println!("{}", "✅ Seeding complete".green().bold());
    Ok(())
}

/// Shows row counts for every table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let restaurants_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
        .fetch_one(pool)
        .await?;

    let pizzas_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pizzas")
        .fetch_one(pool)
        .await?;

    let offerings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
        .fetch_one(pool)
        .await?;

    println!(
        "  Restaurants: {}",
        restaurants_count.to_string().bright_green().bold()
    );
    println!(
        "  Pizzas:      {}",
        pizzas_count.to_string().bright_green().bold()
    );
    println!(
        "  Offerings:   {}",
        offerings_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
