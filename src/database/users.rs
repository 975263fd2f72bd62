// ABOUTME: Users table schema and CRUD, including the guarded insert contract
// ABOUTME: Validate locally, insert inside a transaction, commit or roll back atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

use super::transactions::TransactionGuard;
use super::Database;
use crate::errors::AppResult;
use crate::models::{NewUser, User};
use sqlx::{sqlite::SqliteRow, Row};
use tracing::debug;

impl Database {
    /// Create the users table and its indexes.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-object error if the table already exists
    pub(super) async fn create_users_schema(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE users (
                id INTEGER PRIMARY KEY,
                user_name TEXT NOT NULL,
                age INTEGER CHECK (age >= 0),
                gender TEXT,
                weight REAL,
                height REAL,
                contact_info TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX idx_users_user_name ON users(user_name)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX idx_users_gender ON users(gender)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert one user atomically: validate the payload before issuing any
    /// statement, then insert inside a transaction that commits on success
    /// and rolls back on any storage failure. The store observes either the
    /// fully-committed row or no row.
    ///
    /// # Errors
    ///
    /// Returns a validation error (storage untouched) if the payload is
    /// invalid, or a database error (transaction rolled back) if the insert
    /// fails
    pub async fn insert_user_guarded(&self, user: &NewUser) -> AppResult<i64> {
        user.validate()?;

        let tx = self.pool.begin().await?;
        let mut guard = TransactionGuard::new(tx);

        let result = sqlx::query(
            r"
            INSERT INTO users (user_name, age, gender, weight, height, contact_info)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&user.user_name)
        .bind(user.age)
        .bind(&user.gender)
        .bind(user.weight)
        .bind(user.height)
        .bind(&user.contact_info)
        .execute(guard.executor()?)
        .await;

        match result {
            Ok(done) => {
                let id = done.last_insert_rowid();
                guard.commit().await?;
                debug!(user_name = %user.user_name, id, "user inserted");
                Ok(id)
            }
            Err(e) => {
                guard.rollback().await?;
                Err(e.into())
            }
        }
    }

    /// Get a user by generated id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user(&self, id: i64) -> AppResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, user_name, age, gender, weight, height, contact_info FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| Self::row_to_user(&r)))
    }

    /// Get a user by name. Uniqueness of names is conventional; when
    /// duplicates exist the earliest row wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user_by_name(&self, user_name: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, user_name, age, gender, weight, height, contact_info
            FROM users WHERE user_name = $1
            ORDER BY id LIMIT 1
            ",
        )
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| Self::row_to_user(&r)))
    }

    /// Update a user's age by name; returns the number of rows touched
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails (including the age CHECK)
    pub async fn update_user_age(&self, user_name: &str, age: i64) -> AppResult<u64> {
        let done = sqlx::query("UPDATE users SET age = $1 WHERE user_name = $2")
            .bind(age)
            .bind(user_name)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    /// Delete a user by name; returns the number of rows removed.
    ///
    /// There is no delete cascade: removing a user that still owns child
    /// rows fails with a foreign-key error instead of orphaning them.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_user_by_name(&self, user_name: &str) -> AppResult<u64> {
        let done = sqlx::query("DELETE FROM users WHERE user_name = $1")
            .bind(user_name)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    /// Total user count
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn user_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    fn row_to_user(row: &SqliteRow) -> User {
        User {
            id: row.get("id"),
            user_name: row.get("user_name"),
            age: row.get("age"),
            gender: row.get("gender"),
            weight: row.get("weight"),
            height: row.get("height"),
            contact_info: row.get("contact_info"),
        }
    }
}
