// ABOUTME: Nutrition logs table schema and operations
// ABOUTME: Meal entries per user, indexed on meal name and meal time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

use super::Database;
use crate::errors::AppResult;
use crate::models::{NewNutritionLog, NutritionLog};
use sqlx::{sqlite::SqliteRow, Row};

impl Database {
    /// Create the `nutrition_logs` table and its indexes.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-object error if the table already exists
    pub(super) async fn create_nutrition_logs_schema(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE nutrition_logs (
                id INTEGER PRIMARY KEY,
                user_id INTEGER REFERENCES users(id),
                meal_name TEXT,
                food_items TEXT,
                meal_time DATETIME
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX idx_nutrition_logs_user_id ON nutrition_logs(user_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX idx_nutrition_logs_meal_name ON nutrition_logs(meal_name)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX idx_nutrition_logs_meal_time ON nutrition_logs(meal_time)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert one nutrition log; returns the generated id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_nutrition_log(&self, log: &NewNutritionLog) -> AppResult<i64> {
        let done = sqlx::query(
            r"
            INSERT INTO nutrition_logs (user_id, meal_name, food_items, meal_time)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(log.user_id)
        .bind(&log.meal_name)
        .bind(&log.food_items)
        .bind(log.meal_time)
        .execute(&self.pool)
        .await?;

        Ok(done.last_insert_rowid())
    }

    /// All nutrition logs for one user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn nutrition_logs_for_user(&self, user_id: i64) -> AppResult<Vec<NutritionLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, meal_name, food_items, meal_time
            FROM nutrition_logs WHERE user_id = $1
            ORDER BY meal_time DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_nutrition_log).collect())
    }

    fn row_to_nutrition_log(row: &SqliteRow) -> NutritionLog {
        NutritionLog {
            id: row.get("id"),
            user_id: row.get("user_id"),
            meal_name: row.get("meal_name"),
            food_items: row.get("food_items"),
            meal_time: row.get("meal_time"),
        }
    }
}
