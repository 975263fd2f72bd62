// ABOUTME: Schema lifecycle tests: non-idempotent creation, reset, FK enforcement
// ABOUTME: Also exercises the file-backed path where connect creates the database file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

use chrono::NaiveDateTime;
use vitalog::database::Database;
use vitalog::models::{NewExerciseLog, NewUser};

async fn create_test_db() -> Database {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.create_schema().await.unwrap();
    db
}

#[tokio::test]
async fn test_recreating_schema_fails_with_duplicate_error() {
    let db = create_test_db().await;

    let err = db.create_schema().await.unwrap_err();
    assert!(err.to_string().contains("already exists"));
    db.close().await;
}

#[tokio::test]
async fn test_reset_schema_clears_rows_and_recreates() {
    let db = create_test_db().await;

    db.insert_user_guarded(&NewUser::new("JohnDoe", 30))
        .await
        .unwrap();
    assert_eq!(db.user_count().await.unwrap(), 1);

    db.reset_schema().await.unwrap();
    assert_eq!(db.user_count().await.unwrap(), 0);

    // Still non-idempotent after a reset
    assert!(db.create_schema().await.is_err());
    db.close().await;
}

#[tokio::test]
async fn test_orphan_child_row_is_rejected() {
    let db = create_test_db().await;

    let log = NewExerciseLog {
        user_id: 999,
        exercise_type: "Running".into(),
        duration_minutes: 30,
        intensity: "Low".into(),
        logged_at: NaiveDateTime::parse_from_str("2023-10-15 08:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
        calories_burned: None,
        distance_covered: None,
        heart_rate: None,
        weight_lifted_lbs: None,
    };

    let err = db.insert_exercise_log(&log).await.unwrap_err();
    assert!(err.to_string().contains("FOREIGN KEY constraint failed"));
    db.close().await;
}

#[tokio::test]
async fn test_deleting_user_with_children_fails_instead_of_orphaning() {
    let db = create_test_db().await;

    let user_id = db
        .insert_user_guarded(&NewUser::new("JohnDoe", 30))
        .await
        .unwrap();
    db.insert_exercise_log(&NewExerciseLog {
        user_id,
        exercise_type: "Cycling".into(),
        duration_minutes: 45,
        intensity: "Moderate".into(),
        logged_at: NaiveDateTime::parse_from_str("2023-10-15 08:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
        calories_burned: None,
        distance_covered: None,
        heart_rate: None,
        weight_lifted_lbs: None,
    })
    .await
    .unwrap();

    assert!(db.delete_user_by_name("JohnDoe").await.is_err());
    assert_eq!(db.user_count().await.unwrap(), 1);
    db.close().await;
}

#[tokio::test]
async fn test_connect_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitness.db");
    let url = format!("sqlite:{}", path.display());

    let db = Database::connect(&url).await.unwrap();
    db.create_schema().await.unwrap();
    db.insert_user_guarded(&NewUser::new("JohnDoe", 30))
        .await
        .unwrap();
    db.close().await;

    assert!(path.exists());

    // Schema and data survive a reconnect
    let db = Database::connect(&url).await.unwrap();
    assert_eq!(db.user_count().await.unwrap(), 1);
    assert!(db.create_schema().await.is_err());
    db.close().await;
}
