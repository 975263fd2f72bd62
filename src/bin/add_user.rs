// ABOUTME: Guarded insert demo: validate a candidate user, then commit or roll back
// ABOUTME: Valid input commits and prints success; a negative age rolls back and writes nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

//! Guarded insert demonstration for Vitalog.
//!
//! Inserts one user inside a transaction. The age is validated locally
//! before any statement is issued; on validation failure or any storage
//! failure the transaction rolls back and the store is left untouched. The
//! connection is closed on every exit path.
//!
//! Usage:
//! ```bash
//! # Commits and prints a success message
//! cargo run --bin add-user -- --user-name JohnDoe --age 30 --gender Male
//!
//! # Rolls back and prints an error message, no row is written
//! cargo run --bin add-user -- --user-name JohnDoe --age=-25 --gender Male
//! ```

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use vitalog::config::{Config, DatabaseUrl};
use vitalog::database::Database;
use vitalog::models::NewUser;

#[derive(Parser)]
#[command(
    name = "add-user",
    about = "Vitalog guarded insert demo",
    long_about = "Insert one user atomically: validate, insert, commit-or-rollback"
)]
struct AddUserArgs {
    /// Database URL override (falls back to `DATABASE_URL`, then the default)
    #[arg(long)]
    database_url: Option<String>,

    /// User name to insert
    #[arg(long, default_value = "JohnDoe")]
    user_name: String,

    /// Age in years; negative values demonstrate the rollback path
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    age: i64,

    /// Gender
    #[arg(long, default_value = "Male")]
    gender: String,

    /// Body weight in pounds
    #[arg(long)]
    weight: Option<f64>,

    /// Height in feet
    #[arg(long)]
    height: Option<f64>,

    /// Contact email
    #[arg(long)]
    contact_info: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = AddUserArgs::parse();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.to_string())
        .init();

    let database_url = match &args.database_url {
        Some(url) => DatabaseUrl::parse_url(url)?,
        None => config.database_url,
    };

    info!("Connecting to database: {}", database_url);
    let db = Database::connect(&database_url.to_connection_string()).await?;

    let mut user = NewUser::new(args.user_name, args.age).with_gender(args.gender);
    user.weight = args.weight;
    user.height = args.height;
    user.contact_info = args.contact_info;

    let outcome = db.insert_user_guarded(&user).await;

    // Close before reporting so the file handle is released on every path
    db.close().await;

    match outcome {
        Ok(id) => {
            println!("User insertion successful (id {id}).");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("User insertion failed; the transaction was rolled back.");
            Ok(ExitCode::FAILURE)
        }
    }
}
