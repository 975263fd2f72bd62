// ABOUTME: Demo data seeder for the Vitalog fitness database
// ABOUTME: Populates users plus a fixed multiple of dependent rows per user with synthetic values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

//! Demo data seeder for Vitalog.
//!
//! Populates the database with synthetic users, exercise logs, goals, health
//! metrics, nutrition logs, sleep records, and preferences.
//!
//! Usage:
//! ```bash
//! # Seed 100 users into the default database
//! cargo run --bin seed-demo-data
//!
//! # Drop and recreate the schema first
//! cargo run --bin seed-demo-data -- --reset
//!
//! # Smaller run against a specific file
//! cargo run --bin seed-demo-data -- --database-url sqlite:demo.db --users 10
//! ```

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use vitalog::config::{Config, DatabaseUrl, LogLevel};
use vitalog::database::Database;
use vitalog::seed::{seed_database, SeedConfig};

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Vitalog demo data seeder",
    long_about = "Populate the fitness database with synthetic rows for demos and query analysis"
)]
struct SeedArgs {
    /// Database URL override (falls back to `DATABASE_URL`, then the default)
    #[arg(long)]
    database_url: Option<String>,

    /// Number of users to generate
    #[arg(long, default_value = "100")]
    users: u32,

    /// Drop and recreate the schema before seeding
    #[arg(long)]
    reset: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();
    let config = Config::from_env()?;

    let log_level = if args.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level.to_string())
        .init();

    info!("=== Vitalog Demo Data Seeder ===");

    let database_url = match &args.database_url {
        Some(url) => DatabaseUrl::parse_url(url)?,
        None => config.database_url,
    };

    info!("Connecting to database: {}", database_url);
    let db = Database::connect(&database_url.to_connection_string()).await?;

    // Close on every exit path, including failures mid-seed
    let outcome = seed(&db, &args).await;
    db.close().await;
    outcome
}

async fn seed(db: &Database, args: &SeedArgs) -> Result<()> {
    if args.reset {
        info!("Resetting schema...");
        db.reset_schema().await?;
    } else if let Err(e) = db.create_schema().await {
        anyhow::bail!(
            "schema creation failed ({e}); pass --reset to drop and recreate an initialized store"
        );
    }

    let config = SeedConfig {
        users: args.users,
        ..SeedConfig::default()
    };
    let mut rng = StdRng::from_entropy();

    info!("Seeding {} users with dependent rows...", config.users);
    let user_ids = seed_database(db, &config, &mut rng).await?;
    info!("  Created {} users", user_ids.len());

    let counts = db.row_counts().await?;
    info!("");
    info!("=== Seeding Complete ===");
    info!("  users:             {}", counts.users);
    info!("  exercise_logs:     {}", counts.exercise_logs);
    info!("  goals_and_progress:{}", counts.goals);
    info!("  health_metrics:    {}", counts.health_metrics);
    info!("  nutrition_logs:    {}", counts.nutrition_logs);
    info!("  sleep_records:     {}", counts.sleep_records);
    info!("  user_preferences:  {}", counts.user_preferences);
    info!("  total rows:        {}", counts.total());

    Ok(())
}
