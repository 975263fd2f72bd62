// ABOUTME: Environment-based configuration for database location and log level
// ABOUTME: Parses DATABASE_URL into a typed DatabaseUrl and LOG_LEVEL into a LogLevel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

//! Environment-based configuration.
//!
//! Every binary reads its settings from the environment (with CLI overrides
//! layered on top by `clap`). There is no configuration file.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Default database location when neither the CLI nor the environment
/// provides one
pub const DEFAULT_DATABASE_URL: &str = "sqlite:vitalog.db";

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database backed by a file
    SQLite {
        /// Path to the `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty
    pub fn parse_url(s: &str) -> AppResult<Self> {
        if s.is_empty() {
            return Err(AppError::config("DATABASE_URL must not be empty"));
        }
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Ok(Self::Memory)
        } else {
            Ok(Self::SQLite {
                path: PathBuf::from(path_str),
            })
        }
    }

    /// Convert to the connection string handed to the store
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Normal operational output
    #[default]
    Info,
    /// Verbose debugging output
    Debug,
    /// Everything, including per-statement noise
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Runtime configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the database lives
    pub database_url: DatabaseUrl,
    /// Log verbosity for the tracing subscriber
    pub log_level: LogLevel,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is set but malformed
    pub fn from_env() -> AppResult<Self> {
        let raw_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        let database_url = DatabaseUrl::parse_url(&raw_url)?;

        let log_level = env::var("LOG_LEVEL")
            .map(|s| LogLevel::from_str_or_default(&s))
            .unwrap_or_default();

        Ok(Self {
            database_url,
            log_level,
        })
    }
}
