// ABOUTME: RAII transaction guard ensuring rollback on every non-committed exit path
// ABOUTME: Wraps a sqlx SQLite transaction; commit consumes the guard, drop rolls back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

//! Transaction management for the guarded write path.
//!
//! [`TransactionGuard`] wraps a `sqlx` transaction so that the store observes
//! either the fully-committed write or nothing:
//!
//! - dropping the guard without committing rolls the transaction back
//! - `commit()` consumes the guard, so a double commit cannot compile
//! - `rollback()` is available for explicit early exits with error handling
//!
//! There is no retry layer on top of this: the workload is single-writer and
//! every failure is terminal for the current operation.

use sqlx::{Sqlite, SqliteConnection, Transaction};
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// RAII guard for a `SQLite` transaction
pub struct TransactionGuard<'c> {
    transaction: Option<Transaction<'c, Sqlite>>,
    committed: bool,
}

impl<'c> TransactionGuard<'c> {
    /// Wrap a transaction obtained from `pool.begin().await`
    #[must_use]
    pub fn new(transaction: Transaction<'c, Sqlite>) -> Self {
        debug!("transaction guard created; rolls back unless committed");
        Self {
            transaction: Some(transaction),
            committed: false,
        }
    }

    /// Commit the transaction and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already consumed or the commit fails
    pub async fn commit(mut self) -> AppResult<()> {
        match self.transaction.take() {
            Some(tx) => {
                tx.commit()
                    .await
                    .map_err(|e| AppError::database(format!("transaction commit failed: {e}")))?;
                self.committed = true;
                debug!("transaction committed");
                Ok(())
            }
            None => Err(AppError::internal("transaction already consumed")),
        }
    }

    /// Explicitly roll back and consume the guard.
    ///
    /// Dropping the guard rolls back too; this variant surfaces rollback
    /// failures instead of swallowing them.
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already consumed or the rollback
    /// fails
    pub async fn rollback(mut self) -> AppResult<()> {
        match self.transaction.take() {
            Some(tx) => {
                tx.rollback()
                    .await
                    .map_err(|e| AppError::database(format!("transaction rollback failed: {e}")))?;
                debug!("transaction rolled back");
                Ok(())
            }
            None => Err(AppError::internal("transaction already consumed")),
        }
    }

    /// Whether `commit` has run
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.committed
    }

    /// Mutable connection handle for executing statements inside the
    /// transaction
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already consumed
    pub fn executor(&mut self) -> AppResult<&mut SqliteConnection> {
        self.transaction
            .as_deref_mut()
            .ok_or_else(|| AppError::internal("transaction guard used after commit/rollback"))
    }
}

impl Drop for TransactionGuard<'_> {
    fn drop(&mut self) {
        if self.transaction.is_some() && !self.committed {
            // sqlx rolls the inner transaction back on drop; log it so a
            // missing commit is visible in traces
            warn!("transaction guard dropped without commit; rolling back");
        }
    }
}
