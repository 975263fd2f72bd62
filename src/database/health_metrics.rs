// ABOUTME: Health metrics table schema and operations
// ABOUTME: Body measurements per user; heavily indexed for the analysis queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

use super::Database;
use crate::errors::AppResult;
use crate::models::{HealthMetric, NewHealthMetric};
use sqlx::{sqlite::SqliteRow, Row};

impl Database {
    /// Create the `health_metrics` table and its indexes.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-object error if the table already exists
    pub(super) async fn create_health_metrics_schema(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE health_metrics (
                id INTEGER PRIMARY KEY,
                user_id INTEGER REFERENCES users(id),
                weight REAL,
                waist_circumference REAL,
                hip_circumference REAL,
                body_fat_percentage REAL,
                muscle_mass REAL,
                blood_pressure TEXT,
                step_count INTEGER
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        for statement in [
            "CREATE INDEX idx_health_metrics_user_id ON health_metrics(user_id)",
            "CREATE INDEX idx_health_metrics_weight ON health_metrics(weight)",
            "CREATE INDEX idx_health_metrics_waist_circumference ON health_metrics(waist_circumference)",
            "CREATE INDEX idx_health_metrics_hip_circumference ON health_metrics(hip_circumference)",
            "CREATE INDEX idx_health_metrics_body_fat_percentage ON health_metrics(body_fat_percentage)",
        ] {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        Ok(())
    }

    /// Insert one health metric row; returns the generated id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_health_metric(&self, metric: &NewHealthMetric) -> AppResult<i64> {
        let done = sqlx::query(
            r"
            INSERT INTO health_metrics (
                user_id, weight, waist_circumference, hip_circumference,
                body_fat_percentage, muscle_mass, blood_pressure, step_count
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(metric.user_id)
        .bind(metric.weight)
        .bind(metric.waist_circumference)
        .bind(metric.hip_circumference)
        .bind(metric.body_fat_percentage)
        .bind(metric.muscle_mass)
        .bind(&metric.blood_pressure)
        .bind(metric.step_count)
        .execute(&self.pool)
        .await?;

        Ok(done.last_insert_rowid())
    }

    /// All health metrics for one user
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn health_metrics_for_user(&self, user_id: i64) -> AppResult<Vec<HealthMetric>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, weight, waist_circumference, hip_circumference,
                   body_fat_percentage, muscle_mass, blood_pressure, step_count
            FROM health_metrics WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_health_metric).collect())
    }

    fn row_to_health_metric(row: &SqliteRow) -> HealthMetric {
        HealthMetric {
            id: row.get("id"),
            user_id: row.get("user_id"),
            weight: row.get("weight"),
            waist_circumference: row.get("waist_circumference"),
            hip_circumference: row.get("hip_circumference"),
            body_fat_percentage: row.get("body_fat_percentage"),
            muscle_mass: row.get("muscle_mass"),
            blood_pressure: row.get("blood_pressure"),
            step_count: row.get("step_count"),
        }
    }
}
