// ABOUTME: Tests for the synthetic data generator: row counts and range discipline
// ABOUTME: Seeds a small configuration and checks every per-user multiple
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

// Test files: allow missing_docs (rustc lint) and unwrap (valid in tests)
#![allow(missing_docs, clippy::unwrap_used)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use vitalog::database::Database;
use vitalog::seed::{seed_database, SeedConfig};

async fn create_test_db() -> Database {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.create_schema().await.unwrap();
    db
}

fn small_config() -> SeedConfig {
    SeedConfig {
        users: 3,
        ..SeedConfig::default()
    }
}

#[tokio::test]
async fn test_seed_produces_expected_row_counts() {
    let db = create_test_db().await;
    let mut rng = StdRng::seed_from_u64(42);

    let user_ids = seed_database(&db, &small_config(), &mut rng).await.unwrap();
    assert_eq!(user_ids.len(), 3);

    let counts = db.row_counts().await.unwrap();
    assert_eq!(counts.users, 3);
    assert_eq!(counts.exercise_logs, 30);
    assert_eq!(counts.goals, 15);
    assert_eq!(counts.health_metrics, 15);
    assert_eq!(counts.nutrition_logs, 15);
    assert_eq!(counts.sleep_records, 15);
    assert_eq!(counts.user_preferences, 3);
    assert_eq!(counts.total(), 96);
    db.close().await;
}

#[tokio::test]
async fn test_seeded_rows_respect_documented_ranges() {
    let db = create_test_db().await;
    let mut rng = StdRng::seed_from_u64(7);

    let user_ids = seed_database(&db, &small_config(), &mut rng).await.unwrap();

    for &user_id in &user_ids {
        let user = db.get_user(user_id).await.unwrap().unwrap();
        assert!((18..=70).contains(&user.age));
        assert!((100.0..=300.0).contains(&user.weight.unwrap()));
        assert!((4.5..=7.0).contains(&user.height.unwrap()));

        for log in db.exercise_logs_for_user(user_id).await.unwrap() {
            assert!((10..=120).contains(&log.duration_minutes));
            assert!((80..=200).contains(&log.heart_rate.unwrap()));
        }

        for goal in db.goals_for_user(user_id).await.unwrap() {
            assert!(goal.progress_value >= 0.0);
            assert!(goal.progress_value <= goal.goal_value);
        }

        for record in db.sleep_records_for_user(user_id).await.unwrap() {
            assert!((240..=540).contains(&record.sleep_duration_minutes));
            assert!((1..=5).contains(&record.sleep_quality_rating));
            let elapsed = record.sleep_end_time - record.sleep_start_time;
            assert_eq!(elapsed.num_minutes(), record.sleep_duration_minutes);
        }

        let preference = db.get_preferences(user_id).await.unwrap().unwrap();
        assert!(preference.fitness_goal.is_some());
    }
    db.close().await;
}

#[tokio::test]
async fn test_seeded_metrics_and_meals_are_well_formed() {
    let db = create_test_db().await;
    let mut rng = StdRng::seed_from_u64(99);

    let user_ids = seed_database(&db, &small_config(), &mut rng).await.unwrap();

    for &user_id in &user_ids {
        for metric in db.health_metrics_for_user(user_id).await.unwrap() {
            let bp = metric.blood_pressure.unwrap();
            let (systolic, diastolic) = bp.split_once('/').unwrap();
            assert!((90..=140).contains(&systolic.parse::<i64>().unwrap()));
            assert!((60..=90).contains(&diastolic.parse::<i64>().unwrap()));
            assert!((1000..=20_000).contains(&metric.step_count.unwrap()));
        }

        for meal in db.nutrition_logs_for_user(user_id).await.unwrap() {
            assert!(["Breakfast", "Lunch", "Dinner", "Snack"].contains(&meal.meal_name.as_str()));
            assert!(!meal.food_items.is_empty());
        }
    }
    db.close().await;
}
