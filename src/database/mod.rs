// ABOUTME: Store handle for the single-file fitness database
// ABOUTME: Owns the connection pool, schema lifecycle, and per-table operation modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

//! # Database Management
//!
//! The [`Database`] handle wraps a `SQLite` connection pool and is passed
//! explicitly to everything that touches storage; there is no global
//! connection object. Schema creation is deliberately NOT idempotent:
//! re-running [`Database::create_schema`] against an initialized store fails
//! with the engine's duplicate-object error, and [`Database::reset_schema`]
//! (drop then create) is the explicit recovery path.
//!
//! Foreign keys are enforced at the storage level; they are declared in the
//! schema but `SQLite` only honors them when the pragma is enabled, which
//! [`Database::connect`] does for every connection.

mod exercise_logs;
mod goals;
mod health_metrics;
mod nutrition_logs;
mod preferences;
mod sleep_records;
mod users;

/// RAII transaction guard for the guarded write path
pub mod transactions;

use crate::errors::AppResult;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::debug;

/// Store handle for the fitness database
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a connection pool to the given database URL.
    ///
    /// Creates the database file if it does not exist and enables
    /// foreign-key enforcement. The pool is capped at a single connection:
    /// the workload is one writer per process, and `sqlite::memory:` gives
    /// every connection its own private database, so a larger pool would
    /// split state across invisible copies. Connecting does not create the
    /// schema; see [`Database::create_schema`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or the file cannot be opened
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        debug!("connected to {database_url}");

        Ok(Self { pool })
    }

    /// Get a reference to the pool for raw queries
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create all seven tables and their secondary indexes.
    ///
    /// NOT idempotent: fails with a duplicate-object error when any table
    /// already exists. Callers that want a clean slate use
    /// [`Database::reset_schema`].
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index already exists, or if creation
    /// fails
    pub async fn create_schema(&self) -> AppResult<()> {
        // Parent table first so child FK declarations resolve
        self.create_users_schema().await?;
        self.create_exercise_logs_schema().await?;
        self.create_goals_schema().await?;
        self.create_health_metrics_schema().await?;
        self.create_nutrition_logs_schema().await?;
        self.create_sleep_records_schema().await?;
        self.create_preferences_schema().await?;
        Ok(())
    }

    /// Drop every table (children first). Indexes go down with their tables.
    ///
    /// # Errors
    ///
    /// Returns an error if a drop statement fails
    pub async fn drop_schema(&self) -> AppResult<()> {
        for table in [
            "user_preferences",
            "sleep_records",
            "nutrition_logs",
            "health_metrics",
            "goals_and_progress",
            "exercise_logs",
            "users",
        ] {
            sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// Drop and recreate the schema
    ///
    /// # Errors
    ///
    /// Returns an error if either phase fails
    pub async fn reset_schema(&self) -> AppResult<()> {
        self.drop_schema().await?;
        self.create_schema().await
    }

    /// Row counts per table, for post-seed summaries and tests
    ///
    /// # Errors
    ///
    /// Returns an error if any count query fails
    pub async fn row_counts(&self) -> AppResult<RowCounts> {
        Ok(RowCounts {
            users: self.count_table("users").await?,
            exercise_logs: self.count_table("exercise_logs").await?,
            goals: self.count_table("goals_and_progress").await?,
            health_metrics: self.count_table("health_metrics").await?,
            nutrition_logs: self.count_table("nutrition_logs").await?,
            sleep_records: self.count_table("sleep_records").await?,
            user_preferences: self.count_table("user_preferences").await?,
        })
    }

    async fn count_table(&self, table: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Close the pool, releasing the file handle. Safe to call on every
    /// exit path; pending connections are drained first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Per-table row counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowCounts {
    /// Rows in `users`
    pub users: i64,
    /// Rows in `exercise_logs`
    pub exercise_logs: i64,
    /// Rows in `goals_and_progress`
    pub goals: i64,
    /// Rows in `health_metrics`
    pub health_metrics: i64,
    /// Rows in `nutrition_logs`
    pub nutrition_logs: i64,
    /// Rows in `sleep_records`
    pub sleep_records: i64,
    /// Rows in `user_preferences`
    pub user_preferences: i64,
}

impl RowCounts {
    /// Total rows across all tables
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.users
            + self.exercise_logs
            + self.goals
            + self.health_metrics
            + self.nutrition_logs
            + self.sleep_records
            + self.user_preferences
    }
}
