// ABOUTME: Goals-and-progress table schema and operations
// ABOUTME: Progress is bounded by the goal value at the insert boundary, not in storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

use super::Database;
use crate::errors::AppResult;
use crate::models::{Goal, NewGoal};
use sqlx::{sqlite::SqliteRow, Row};

impl Database {
    /// Create the `goals_and_progress` table and its indexes.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-object error if the table already exists
    pub(super) async fn create_goals_schema(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE goals_and_progress (
                id INTEGER PRIMARY KEY,
                user_id INTEGER REFERENCES users(id),
                goal_type TEXT,
                goal_value REAL,
                progress_value REAL CHECK (progress_value >= 0)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX idx_goals_and_progress_user_id ON goals_and_progress(user_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query(
            "CREATE INDEX idx_goals_and_progress_goal_type ON goals_and_progress(goal_type)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert one goal after validating the payload; returns the generated id
    ///
    /// # Errors
    ///
    /// Returns a validation error if progress is negative or exceeds the
    /// goal, or a database error if the insert fails
    pub async fn insert_goal(&self, goal: &NewGoal) -> AppResult<i64> {
        goal.validate()?;

        let done = sqlx::query(
            r"
            INSERT INTO goals_and_progress (user_id, goal_type, goal_value, progress_value)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(goal.user_id)
        .bind(&goal.goal_type)
        .bind(goal.goal_value)
        .bind(goal.progress_value)
        .execute(&self.pool)
        .await?;

        Ok(done.last_insert_rowid())
    }

    /// All goals for one user
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn goals_for_user(&self, user_id: i64) -> AppResult<Vec<Goal>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, goal_type, goal_value, progress_value
            FROM goals_and_progress WHERE user_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_goal).collect())
    }

    fn row_to_goal(row: &SqliteRow) -> Goal {
        Goal {
            id: row.get("id"),
            user_id: row.get("user_id"),
            goal_type: row.get("goal_type"),
            goal_value: row.get("goal_value"),
            progress_value: row.get("progress_value"),
        }
    }
}
