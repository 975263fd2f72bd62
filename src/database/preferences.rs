// ABOUTME: User preferences table schema and operations
// ABOUTME: One row per user; the user id doubles as the primary key, writes are upserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

use super::Database;
use crate::errors::AppResult;
use crate::models::UserPreference;
use sqlx::{sqlite::SqliteRow, Row};

impl Database {
    /// Create the `user_preferences` table and its indexes.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-object error if the table already exists
    pub(super) async fn create_preferences_schema(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE user_preferences (
                user_id INTEGER PRIMARY KEY REFERENCES users(id),
                fitness_goal TEXT,
                dietary_restrictions TEXT,
                preferred_exercises TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX idx_user_preferences_fitness_goal ON user_preferences(fitness_goal)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert or update the preference row for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (including an unknown `user_id`)
    pub async fn upsert_preferences(&self, preference: &UserPreference) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_preferences (user_id, fitness_goal, dietary_restrictions, preferred_exercises)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(user_id) DO UPDATE SET
                fitness_goal = $2,
                dietary_restrictions = $3,
                preferred_exercises = $4
            ",
        )
        .bind(preference.user_id)
        .bind(&preference.fitness_goal)
        .bind(&preference.dietary_restrictions)
        .bind(&preference.preferred_exercises)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get the preference row for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_preferences(&self, user_id: i64) -> AppResult<Option<UserPreference>> {
        let row = sqlx::query(
            r"
            SELECT user_id, fitness_goal, dietary_restrictions, preferred_exercises
            FROM user_preferences WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| Self::row_to_preference(&r)))
    }

    fn row_to_preference(row: &SqliteRow) -> UserPreference {
        UserPreference {
            user_id: row.get("user_id"),
            fitness_goal: row.get("fitness_goal"),
            dietary_restrictions: row.get("dietary_restrictions"),
            preferred_exercises: row.get("preferred_exercises"),
        }
    }
}
