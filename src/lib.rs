// ABOUTME: Library entry point for the Vitalog fitness database toolkit
// ABOUTME: Exposes the schema/store layer, synthetic data seeding, and query timing analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

#![deny(unsafe_code)]

//! # Vitalog
//!
//! A single-file `SQLite` database toolkit for a health/fitness application.
//! The crate defines the seven-table schema (users plus six child tables),
//! the guarded write path used when adding a user record, a synthetic data
//! generator, and a query timing comparison utility.
//!
//! Three binaries sit on top of the library:
//!
//! - `seed-demo-data` populates the store with synthetic rows
//! - `query-analysis` compares wall-clock timings of equivalent query pairs
//! - `add-user` demonstrates the validate / insert / commit-or-rollback contract
//!
//! Each binary opens its own connection, performs linear steps, and exits.
//! There is no shared runtime and no coordination between them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vitalog::database::Database;
//! use vitalog::models::NewUser;
//!
//! #[tokio::main]
//! async fn main() -> vitalog::errors::AppResult<()> {
//!     let db = Database::connect("sqlite::memory:").await?;
//!     db.create_schema().await?;
//!
//!     let user = NewUser::new("JohnDoe", 30).with_gender("Male");
//!     let id = db.insert_user_guarded(&user).await?;
//!     println!("inserted user {id}");
//!
//!     db.close().await;
//!     Ok(())
//! }
//! ```

/// Query timing comparison fixtures and bar-chart rendering
pub mod analysis;

/// Environment-based configuration
pub mod config;

/// Store handle, schema definition, and per-table operations
pub mod database;

/// Unified error handling with standard error codes
pub mod errors;

/// Row types and insert payloads for the seven tables
pub mod models;

/// Synthetic data generation for demo and analysis runs
pub mod seed;
