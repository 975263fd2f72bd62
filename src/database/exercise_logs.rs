// ABOUTME: Exercise logs table schema and CRUD operations
// ABOUTME: Child of users; indexed on user_id, exercise_type, and logged_at
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

use super::Database;
use crate::errors::AppResult;
use crate::models::{ExerciseLog, NewExerciseLog};
use sqlx::{sqlite::SqliteRow, Row};

impl Database {
    /// Create the `exercise_logs` table and its indexes.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-object error if the table already exists
    pub(super) async fn create_exercise_logs_schema(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE exercise_logs (
                id INTEGER PRIMARY KEY,
                user_id INTEGER REFERENCES users(id),
                exercise_type TEXT,
                duration_minutes INTEGER,
                intensity TEXT,
                logged_at DATETIME,
                calories_burned REAL,
                distance_covered REAL,
                heart_rate INTEGER,
                weight_lifted_lbs REAL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX idx_exercise_logs_user_id ON exercise_logs(user_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX idx_exercise_logs_exercise_type ON exercise_logs(exercise_type)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX idx_exercise_logs_logged_at ON exercise_logs(logged_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert one exercise log; returns the generated id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (including an unknown `user_id`)
    pub async fn insert_exercise_log(&self, log: &NewExerciseLog) -> AppResult<i64> {
        let done = sqlx::query(
            r"
            INSERT INTO exercise_logs (
                user_id, exercise_type, duration_minutes, intensity, logged_at,
                calories_burned, distance_covered, heart_rate, weight_lifted_lbs
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(log.user_id)
        .bind(&log.exercise_type)
        .bind(log.duration_minutes)
        .bind(&log.intensity)
        .bind(log.logged_at)
        .bind(log.calories_burned)
        .bind(log.distance_covered)
        .bind(log.heart_rate)
        .bind(log.weight_lifted_lbs)
        .execute(&self.pool)
        .await?;

        Ok(done.last_insert_rowid())
    }

    /// Get an exercise log by generated id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_exercise_log(&self, id: i64) -> AppResult<Option<ExerciseLog>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, exercise_type, duration_minutes, intensity, logged_at,
                   calories_burned, distance_covered, heart_rate, weight_lifted_lbs
            FROM exercise_logs WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| Self::row_to_exercise_log(&r)))
    }

    /// Update the intensity of one log; returns the number of rows touched
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update_exercise_intensity(&self, id: i64, intensity: &str) -> AppResult<u64> {
        let done = sqlx::query("UPDATE exercise_logs SET intensity = $1 WHERE id = $2")
            .bind(intensity)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    /// Delete one log by id; returns the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_exercise_log(&self, id: i64) -> AppResult<u64> {
        let done = sqlx::query("DELETE FROM exercise_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    /// All exercise logs for one user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn exercise_logs_for_user(&self, user_id: i64) -> AppResult<Vec<ExerciseLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, exercise_type, duration_minutes, intensity, logged_at,
                   calories_burned, distance_covered, heart_rate, weight_lifted_lbs
            FROM exercise_logs WHERE user_id = $1
            ORDER BY logged_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_exercise_log).collect())
    }

    fn row_to_exercise_log(row: &SqliteRow) -> ExerciseLog {
        ExerciseLog {
            id: row.get("id"),
            user_id: row.get("user_id"),
            exercise_type: row.get("exercise_type"),
            duration_minutes: row.get("duration_minutes"),
            intensity: row.get("intensity"),
            logged_at: row.get("logged_at"),
            calories_burned: row.get("calories_burned"),
            distance_covered: row.get("distance_covered"),
            heart_rate: row.get("heart_rate"),
            weight_lifted_lbs: row.get("weight_lifted_lbs"),
        }
    }
}
