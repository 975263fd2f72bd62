// ABOUTME: Query timing comparison runner for the Vitalog fitness database
// ABOUTME: Times each fixture pair once, prints the report lines and a terminal bar chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

//! Query timing comparison for Vitalog.
//!
//! Runs the fixed list of query pairs against an existing (typically seeded)
//! database, printing one line per query and a horizontal bar chart. Nothing
//! is persisted; timings are single wall-clock samples.
//!
//! Usage:
//! ```bash
//! cargo run --bin query-analysis
//! cargo run --bin query-analysis -- --database-url sqlite:demo.db
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;
use vitalog::analysis::{format_report, render_bar_chart, run_comparison, QUERY_PAIRS};
use vitalog::config::{Config, DatabaseUrl, LogLevel};
use vitalog::database::Database;

/// Widest bar in the rendered chart, in characters
const CHART_WIDTH: usize = 48;

#[derive(Parser)]
#[command(
    name = "query-analysis",
    about = "Vitalog query timing comparison",
    long_about = "Compare wall-clock timings of equivalent query pairs against the fitness database"
)]
struct AnalysisArgs {
    /// Database URL override (falls back to `DATABASE_URL`, then the default)
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = AnalysisArgs::parse();
    let config = Config::from_env()?;

    let log_level = if args.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level.to_string())
        .init();

    let database_url = match &args.database_url {
        Some(url) => DatabaseUrl::parse_url(url)?,
        None => config.database_url,
    };

    info!("Connecting to database: {}", database_url);
    let db = Database::connect(&database_url.to_connection_string()).await?;

    info!("Timing {} query pairs...", QUERY_PAIRS.len());
    // Close on every exit path, including query failures
    let timings = run_comparison(&db).await;
    db.close().await;
    let timings = timings?;

    print!("{}", format_report(&timings));
    println!();
    print!("{}", render_bar_chart(&timings, CHART_WIDTH));

    Ok(())
}
