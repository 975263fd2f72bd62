// ABOUTME: Synthetic data generation for demo databases and analysis runs
// ABOUTME: Builds users plus a fixed multiple of child rows per user from static word lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

//! Synthetic data generation.
//!
//! Populates the store with a configurable number of users and a fixed
//! multiple of dependent rows per user, using random values within the
//! documented ranges. Identities and free text are assembled from static
//! word lists; all rows go through the same insert operations the rest of
//! the crate uses, so generated data obeys every boundary validation.

use crate::database::Database;
use crate::errors::AppResult;
use crate::models::{
    NewExerciseLog, NewGoal, NewHealthMetric, NewNutritionLog, NewSleepRecord, NewUser,
    UserPreference,
};
use chrono::{Duration, NaiveDateTime, Timelike, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

/// How many rows to generate, per table
#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    /// Number of users
    pub users: u32,
    /// Exercise logs per user
    pub exercise_logs_per_user: u32,
    /// Goals per user
    pub goals_per_user: u32,
    /// Health metric rows per user
    pub health_metrics_per_user: u32,
    /// Nutrition logs per user
    pub nutrition_logs_per_user: u32,
    /// Sleep records per user
    pub sleep_records_per_user: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: 100,
            exercise_logs_per_user: 10,
            goals_per_user: 5,
            health_metrics_per_user: 5,
            nutrition_logs_per_user: 5,
            sleep_records_per_user: 5,
        }
    }
}

const FIRST_NAMES: &[&str] = &[
    "alice", "bob", "charlie", "diana", "eve", "frank", "grace", "henry", "isabella", "james",
    "kate", "leo", "maria", "noah", "olivia", "peter", "quinn", "rachel", "sam", "tina",
];

const LAST_NAMES: &[&str] = &[
    "johnson", "smith", "brown", "prince", "wilson", "miller", "lee", "zhang", "martinez",
    "obrien", "williams", "thompson", "garcia", "davis", "taylor", "anderson", "roberts", "clark",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "mail.net", "fitness.app", "healthtrack.io"];

const GENDERS: &[&str] = &["Male", "Female"];

/// Exercise types the generator draws from
pub const EXERCISE_TYPES: &[&str] = &["Running", "Swimming", "Strength Training", "Cycling"];

/// Intensity labels the generator draws from
pub const INTENSITIES: &[&str] = &["Low", "Moderate", "High"];

const GOAL_TYPES: &[&str] = &["Weight Loss", "Muscle Gain", "General Fitness"];

const MEAL_NAMES: &[&str] = &["Breakfast", "Lunch", "Dinner", "Snack"];

const FOOD_ITEMS: &[&str] = &[
    "oatmeal", "grilled chicken", "brown rice", "salmon", "greek yogurt", "eggs", "avocado",
    "spinach salad", "protein shake", "banana", "almonds", "sweet potato", "cottage cheese",
    "turkey sandwich", "pasta", "apple",
];

const FITNESS_GOALS: &[&str] = &["Lose Weight", "Build Muscle", "General Fitness"];

const DIETARY_RESTRICTIONS: &[&str] = &[
    "none",
    "vegetarian",
    "vegan",
    "gluten free",
    "lactose intolerant",
    "low carb",
    "no shellfish",
];

/// Minutes in the trailing year the generator spreads timestamps over
const MINUTES_PER_YEAR: i64 = 525_600;

/// Seed the database with `config.users` users and their dependent rows.
///
/// Returns the generated user ids in insertion order.
///
/// # Errors
///
/// Returns an error if any insert fails
pub async fn seed_database(
    db: &Database,
    config: &SeedConfig,
    rng: &mut StdRng,
) -> AppResult<Vec<i64>> {
    let now = truncate_to_seconds(Utc::now().naive_utc());

    info!("seeding {} users", config.users);
    let mut user_ids = Vec::with_capacity(config.users as usize);
    for _ in 0..config.users {
        let user = random_user(rng);
        let id = db.insert_user_guarded(&user).await?;
        user_ids.push(id);
    }

    for &user_id in &user_ids {
        for _ in 0..config.exercise_logs_per_user {
            db.insert_exercise_log(&random_exercise_log(rng, user_id, now))
                .await?;
        }
        for _ in 0..config.goals_per_user {
            db.insert_goal(&random_goal(rng, user_id)).await?;
        }
        for _ in 0..config.health_metrics_per_user {
            db.insert_health_metric(&random_health_metric(rng, user_id))
                .await?;
        }
        for _ in 0..config.nutrition_logs_per_user {
            db.insert_nutrition_log(&random_nutrition_log(rng, user_id, now))
                .await?;
        }
        for _ in 0..config.sleep_records_per_user {
            db.insert_sleep_record(&random_sleep_record(rng, user_id, now))
                .await?;
        }
        db.upsert_preferences(&random_preferences(rng, user_id))
            .await?;
        debug!(user_id, "seeded dependent rows");
    }

    Ok(user_ids)
}

/// Random user within the documented ranges: age 18-70, weight 100-300,
/// height 4.5-7.0
fn random_user(rng: &mut StdRng) -> NewUser {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let number = rng.gen_range(1..1000);
    let user_name = format!("{first}{last}{number}");
    let contact = format!("{user_name}@{}", pick(rng, EMAIL_DOMAINS));

    NewUser::new(user_name, rng.gen_range(18..=70))
        .with_gender(pick(rng, GENDERS))
        .with_body(
            round2(rng.gen_range(100.0..=300.0)),
            round2(rng.gen_range(4.5..=7.0)),
        )
        .with_contact(contact)
}

fn random_exercise_log(rng: &mut StdRng, user_id: i64, now: NaiveDateTime) -> NewExerciseLog {
    NewExerciseLog {
        user_id,
        exercise_type: pick(rng, EXERCISE_TYPES).to_owned(),
        duration_minutes: rng.gen_range(10..=120),
        intensity: pick(rng, INTENSITIES).to_owned(),
        logged_at: timestamp_within_last_year(rng, now),
        calories_burned: Some(round2(rng.gen_range(100.0..=600.0))),
        distance_covered: Some(round2(rng.gen_range(0.5..=10.0))),
        heart_rate: Some(rng.gen_range(80..=200)),
        weight_lifted_lbs: Some(round2(rng.gen_range(0.0..=300.0))),
    }
}

/// Progress is drawn from `0..=goal_value`, so the generator always honors
/// the progress-within-goal invariant the insert boundary checks
fn random_goal(rng: &mut StdRng, user_id: i64) -> NewGoal {
    let goal_value = round2(rng.gen_range(5.0..=50.0));
    NewGoal {
        user_id,
        goal_type: pick(rng, GOAL_TYPES).to_owned(),
        goal_value,
        progress_value: round2(rng.gen_range(0.0..=goal_value)),
    }
}

fn random_health_metric(rng: &mut StdRng, user_id: i64) -> NewHealthMetric {
    NewHealthMetric {
        user_id,
        weight: Some(round2(rng.gen_range(100.0..=300.0))),
        waist_circumference: Some(round2(rng.gen_range(20.0..=50.0))),
        hip_circumference: Some(round2(rng.gen_range(20.0..=60.0))),
        body_fat_percentage: Some(round2(rng.gen_range(5.0..=30.0))),
        muscle_mass: Some(round2(rng.gen_range(20.0..=80.0))),
        blood_pressure: Some(format!(
            "{}/{}",
            rng.gen_range(90..=140),
            rng.gen_range(60..=90)
        )),
        step_count: Some(rng.gen_range(1000..=20_000)),
    }
}

fn random_nutrition_log(rng: &mut StdRng, user_id: i64, now: NaiveDateTime) -> NewNutritionLog {
    let item_count = rng.gen_range(3..=6);
    let items: Vec<&str> = (0..item_count).map(|_| pick(rng, FOOD_ITEMS)).collect();

    NewNutritionLog {
        user_id,
        meal_name: pick(rng, MEAL_NAMES).to_owned(),
        food_items: items.join(", "),
        meal_time: timestamp_within_last_year(rng, now),
    }
}

fn random_sleep_record(rng: &mut StdRng, user_id: i64, now: NaiveDateTime) -> NewSleepRecord {
    let duration = rng.gen_range(240..=540);
    let start = timestamp_within_last_year(rng, now);
    NewSleepRecord {
        user_id,
        sleep_duration_minutes: duration,
        sleep_quality_rating: rng.gen_range(1..=5),
        sleep_start_time: start,
        sleep_end_time: start + Duration::minutes(duration),
    }
}

fn random_preferences(rng: &mut StdRng, user_id: i64) -> UserPreference {
    let exercise_count = rng.gen_range(2..=4);
    let exercises: Vec<&str> = (0..exercise_count)
        .map(|_| pick(rng, EXERCISE_TYPES))
        .collect();

    UserPreference {
        user_id,
        fitness_goal: Some(pick(rng, FITNESS_GOALS).to_owned()),
        dietary_restrictions: Some(pick(rng, DIETARY_RESTRICTIONS).to_owned()),
        preferred_exercises: Some(exercises.join(", ")),
    }
}

fn pick<'a>(rng: &mut StdRng, items: &'a [&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn timestamp_within_last_year(rng: &mut StdRng, now: NaiveDateTime) -> NaiveDateTime {
    now - Duration::minutes(rng.gen_range(0..MINUTES_PER_YEAR))
}

fn truncate_to_seconds(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}
