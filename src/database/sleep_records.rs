// ABOUTME: Sleep records table schema and operations
// ABOUTME: Quality rating is validated at the insert boundary; end = start + duration by convention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

use super::Database;
use crate::errors::AppResult;
use crate::models::{NewSleepRecord, SleepRecord};
use sqlx::{sqlite::SqliteRow, Row};

impl Database {
    /// Create the `sleep_records` table and its indexes.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-object error if the table already exists
    pub(super) async fn create_sleep_records_schema(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE sleep_records (
                id INTEGER PRIMARY KEY,
                user_id INTEGER REFERENCES users(id),
                sleep_duration_minutes INTEGER,
                sleep_quality_rating INTEGER,
                sleep_start_time DATETIME,
                sleep_end_time DATETIME
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX idx_sleep_records_user_id ON sleep_records(user_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query(
            "CREATE INDEX idx_sleep_records_sleep_start_time ON sleep_records(sleep_start_time)",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX idx_sleep_records_sleep_end_time ON sleep_records(sleep_end_time)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert one sleep record after validating the payload; returns the
    /// generated id
    ///
    /// # Errors
    ///
    /// Returns a validation error if the quality rating is outside 1..=5,
    /// or a database error if the insert fails
    pub async fn insert_sleep_record(&self, record: &NewSleepRecord) -> AppResult<i64> {
        record.validate()?;

        let done = sqlx::query(
            r"
            INSERT INTO sleep_records (
                user_id, sleep_duration_minutes, sleep_quality_rating,
                sleep_start_time, sleep_end_time
            ) VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(record.user_id)
        .bind(record.sleep_duration_minutes)
        .bind(record.sleep_quality_rating)
        .bind(record.sleep_start_time)
        .bind(record.sleep_end_time)
        .execute(&self.pool)
        .await?;

        Ok(done.last_insert_rowid())
    }

    /// All sleep records for one user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn sleep_records_for_user(&self, user_id: i64) -> AppResult<Vec<SleepRecord>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, sleep_duration_minutes, sleep_quality_rating,
                   sleep_start_time, sleep_end_time
            FROM sleep_records WHERE user_id = $1
            ORDER BY sleep_start_time DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_sleep_record).collect())
    }

    fn row_to_sleep_record(row: &SqliteRow) -> SleepRecord {
        SleepRecord {
            id: row.get("id"),
            user_id: row.get("user_id"),
            sleep_duration_minutes: row.get("sleep_duration_minutes"),
            sleep_quality_rating: row.get("sleep_quality_rating"),
            sleep_start_time: row.get("sleep_start_time"),
            sleep_end_time: row.get("sleep_end_time"),
        }
    }
}
