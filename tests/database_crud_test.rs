// ABOUTME: CRUD tests for users and exercise logs against an in-memory schema
// ABOUTME: Covers insert/lookup/update/delete round trips visible within one session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

use chrono::NaiveDateTime;
use vitalog::database::Database;
use vitalog::models::{NewExerciseLog, NewUser};

/// Create an isolated in-memory database with the full schema
async fn create_test_db() -> Database {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.create_schema().await.unwrap();
    db
}

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn running_log(user_id: i64) -> NewExerciseLog {
    NewExerciseLog {
        user_id,
        exercise_type: "Running".into(),
        duration_minutes: 60,
        intensity: "High".into(),
        logged_at: ts("2023-10-15 08:00:00"),
        calories_burned: None,
        distance_covered: None,
        heart_rate: None,
        weight_lifted_lbs: None,
    }
}

#[tokio::test]
async fn test_insert_user_and_query_by_name() {
    let db = create_test_db().await;

    let user = NewUser::new("JohnDoe", 30).with_gender("Male");
    db.insert_user_guarded(&user).await.unwrap();

    let found = db.get_user_by_name("JohnDoe").await.unwrap().unwrap();
    assert_eq!(found.user_name, "JohnDoe");
    assert_eq!(found.age, 30);
    assert_eq!(found.gender.as_deref(), Some("Male"));

    assert_eq!(db.user_count().await.unwrap(), 1);
    db.close().await;
}

#[tokio::test]
async fn test_update_user_age_is_visible_in_session() {
    let db = create_test_db().await;

    db.insert_user_guarded(&NewUser::new("JohnDoe", 30).with_gender("Male"))
        .await
        .unwrap();

    let touched = db.update_user_age("JohnDoe", 35).await.unwrap();
    assert_eq!(touched, 1);

    let found = db.get_user_by_name("JohnDoe").await.unwrap().unwrap();
    assert_eq!(found.age, 35);
    db.close().await;
}

#[tokio::test]
async fn test_delete_user_by_name() {
    let db = create_test_db().await;

    db.insert_user_guarded(&NewUser::new("JohnDoe", 30).with_gender("Male"))
        .await
        .unwrap();

    let removed = db.delete_user_by_name("JohnDoe").await.unwrap();
    assert_eq!(removed, 1);

    assert!(db.get_user_by_name("JohnDoe").await.unwrap().is_none());
    db.close().await;
}

#[tokio::test]
async fn test_insert_exercise_log_and_read_back_by_id() {
    let db = create_test_db().await;

    let user_id = db
        .insert_user_guarded(&NewUser::new("JohnDoe", 30).with_gender("Male"))
        .await
        .unwrap();

    let log_id = db.insert_exercise_log(&running_log(user_id)).await.unwrap();

    let log = db.get_exercise_log(log_id).await.unwrap().unwrap();
    assert_eq!(log.exercise_type, "Running");
    assert_eq!(log.duration_minutes, 60);
    assert_eq!(log.intensity, "High");
    assert_eq!(log.logged_at, ts("2023-10-15 08:00:00"));
    db.close().await;
}

#[tokio::test]
async fn test_update_exercise_log_intensity() {
    let db = create_test_db().await;

    let user_id = db
        .insert_user_guarded(&NewUser::new("JohnDoe", 30))
        .await
        .unwrap();
    let log_id = db.insert_exercise_log(&running_log(user_id)).await.unwrap();

    let touched = db
        .update_exercise_intensity(log_id, "Moderate")
        .await
        .unwrap();
    assert_eq!(touched, 1);

    let log = db.get_exercise_log(log_id).await.unwrap().unwrap();
    assert_eq!(log.intensity, "Moderate");
    db.close().await;
}

#[tokio::test]
async fn test_delete_exercise_log() {
    let db = create_test_db().await;

    let user_id = db
        .insert_user_guarded(&NewUser::new("JohnDoe", 30))
        .await
        .unwrap();
    let log_id = db.insert_exercise_log(&running_log(user_id)).await.unwrap();

    let removed = db.delete_exercise_log(log_id).await.unwrap();
    assert_eq!(removed, 1);

    assert!(db.get_exercise_log(log_id).await.unwrap().is_none());
    db.close().await;
}

#[tokio::test]
async fn test_lookup_miss_returns_none() {
    let db = create_test_db().await;

    assert!(db.get_user_by_name("nobody").await.unwrap().is_none());
    assert!(db.get_exercise_log(42).await.unwrap().is_none());
    db.close().await;
}
