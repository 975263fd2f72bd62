// ABOUTME: Row types and insert payloads for the seven Vitalog tables
// ABOUTME: New* payloads carry the application-level validation done at the insert boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

//! # Data Models
//!
//! One pair of types per table: a `New*` payload for inserts and a full row
//! type read back from the store. Value invariants that the schema does not
//! enforce (progress within goal, sleep quality rating range) are validated
//! on the payload before any statement is issued.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Candidate user record, validated before the guarded insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display/login name; uniqueness is conventional, not enforced
    pub user_name: String,
    /// Age in years; must be non-negative
    pub age: i64,
    /// Free-text gender
    pub gender: Option<String>,
    /// Body weight in pounds
    pub weight: Option<f64>,
    /// Height in feet
    pub height: Option<f64>,
    /// Email or phone contact
    pub contact_info: Option<String>,
}

impl NewUser {
    /// Create a payload with the required fields
    pub fn new(user_name: impl Into<String>, age: i64) -> Self {
        Self {
            user_name: user_name.into(),
            age,
            gender: None,
            weight: None,
            height: None,
            contact_info: None,
        }
    }

    /// Set the gender field
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Set weight and height
    #[must_use]
    pub const fn with_body(mut self, weight: f64, height: f64) -> Self {
        self.weight = Some(weight);
        self.height = Some(height);
        self
    }

    /// Set the contact field
    #[must_use]
    pub fn with_contact(mut self, contact_info: impl Into<String>) -> Self {
        self.contact_info = Some(contact_info.into());
        self
    }

    /// Validate the payload ahead of any storage call.
    ///
    /// The `age >= 0` column CHECK in the schema is a second, redundant line
    /// of defense; a failure here never touches the store.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the user name is empty or the age is
    /// negative
    pub fn validate(&self) -> AppResult<()> {
        if self.user_name.trim().is_empty() {
            return Err(AppError::invalid_input("user_name must not be empty"));
        }
        if self.age < 0 {
            return Err(AppError::value_out_of_range(format!(
                "age must be non-negative, got {}",
                self.age
            )));
        }
        Ok(())
    }
}

/// A stored user row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Surrogate primary key generated by the store
    pub id: i64,
    /// Display/login name
    pub user_name: String,
    /// Age in years
    pub age: i64,
    /// Free-text gender
    pub gender: Option<String>,
    /// Body weight in pounds
    pub weight: Option<f64>,
    /// Height in feet
    pub height: Option<f64>,
    /// Email or phone contact
    pub contact_info: Option<String>,
}

/// Exercise log insert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExerciseLog {
    /// Owning user
    pub user_id: i64,
    /// Activity name, e.g. "Running"
    pub exercise_type: String,
    /// Session length in minutes
    pub duration_minutes: i64,
    /// "Low", "Moderate" or "High" by convention
    pub intensity: String,
    /// When the session happened
    pub logged_at: NaiveDateTime,
    /// Estimated calories burned
    pub calories_burned: Option<f64>,
    /// Distance covered in miles
    pub distance_covered: Option<f64>,
    /// Average heart rate in bpm
    pub heart_rate: Option<i64>,
    /// Total weight lifted in pounds
    pub weight_lifted_lbs: Option<f64>,
}

/// A stored exercise log row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Surrogate primary key generated by the store
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Activity name
    pub exercise_type: String,
    /// Session length in minutes
    pub duration_minutes: i64,
    /// Session intensity
    pub intensity: String,
    /// When the session happened
    pub logged_at: NaiveDateTime,
    /// Estimated calories burned
    pub calories_burned: Option<f64>,
    /// Distance covered in miles
    pub distance_covered: Option<f64>,
    /// Average heart rate in bpm
    pub heart_rate: Option<i64>,
    /// Total weight lifted in pounds
    pub weight_lifted_lbs: Option<f64>,
}

/// Goal insert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    /// Owning user
    pub user_id: i64,
    /// Goal category, e.g. "Weight Loss"
    pub goal_type: String,
    /// Target value
    pub goal_value: f64,
    /// Progress so far; must stay within `0..=goal_value`
    pub progress_value: f64,
}

impl NewGoal {
    /// Validate the payload ahead of any storage call.
    ///
    /// The store only enforces `progress_value >= 0`; the upper bound is an
    /// application invariant checked here.
    ///
    /// # Errors
    ///
    /// Returns a validation error if progress is negative or exceeds the goal
    pub fn validate(&self) -> AppResult<()> {
        if self.progress_value < 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "progress_value must be non-negative, got {}",
                self.progress_value
            )));
        }
        if self.progress_value > self.goal_value {
            return Err(AppError::value_out_of_range(format!(
                "progress_value {} exceeds goal_value {}",
                self.progress_value, self.goal_value
            )));
        }
        Ok(())
    }
}

/// A stored goal row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Surrogate primary key generated by the store
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Goal category
    pub goal_type: String,
    /// Target value
    pub goal_value: f64,
    /// Progress so far
    pub progress_value: f64,
}

/// Health metric insert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHealthMetric {
    /// Owning user
    pub user_id: i64,
    /// Body weight in pounds
    pub weight: Option<f64>,
    /// Waist circumference in inches
    pub waist_circumference: Option<f64>,
    /// Hip circumference in inches
    pub hip_circumference: Option<f64>,
    /// Body fat percentage
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass in pounds
    pub muscle_mass: Option<f64>,
    /// Blood pressure as "systolic/diastolic" text
    pub blood_pressure: Option<String>,
    /// Daily step count
    pub step_count: Option<i64>,
}

/// A stored health metric row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetric {
    /// Surrogate primary key generated by the store
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Body weight in pounds
    pub weight: Option<f64>,
    /// Waist circumference in inches
    pub waist_circumference: Option<f64>,
    /// Hip circumference in inches
    pub hip_circumference: Option<f64>,
    /// Body fat percentage
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass in pounds
    pub muscle_mass: Option<f64>,
    /// Blood pressure as "systolic/diastolic" text
    pub blood_pressure: Option<String>,
    /// Daily step count
    pub step_count: Option<i64>,
}

/// Nutrition log insert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNutritionLog {
    /// Owning user
    pub user_id: i64,
    /// Meal name, e.g. "Breakfast"
    pub meal_name: String,
    /// Free-text description of what was eaten
    pub food_items: String,
    /// When the meal happened
    pub meal_time: NaiveDateTime,
}

/// A stored nutrition log row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionLog {
    /// Surrogate primary key generated by the store
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Meal name
    pub meal_name: String,
    /// Free-text description of what was eaten
    pub food_items: String,
    /// When the meal happened
    pub meal_time: NaiveDateTime,
}

/// Sleep record insert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSleepRecord {
    /// Owning user
    pub user_id: i64,
    /// Total sleep in minutes
    pub sleep_duration_minutes: i64,
    /// Subjective quality, 1 (worst) to 5 (best)
    pub sleep_quality_rating: i64,
    /// When sleep started
    pub sleep_start_time: NaiveDateTime,
    /// When sleep ended; `start + duration` by convention
    pub sleep_end_time: NaiveDateTime,
}

impl NewSleepRecord {
    /// Validate the payload ahead of any storage call
    ///
    /// # Errors
    ///
    /// Returns a validation error if the quality rating is outside 1..=5
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=5).contains(&self.sleep_quality_rating) {
            return Err(AppError::value_out_of_range(format!(
                "sleep_quality_rating must be between 1 and 5, got {}",
                self.sleep_quality_rating
            )));
        }
        Ok(())
    }
}

/// A stored sleep record row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepRecord {
    /// Surrogate primary key generated by the store
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Total sleep in minutes
    pub sleep_duration_minutes: i64,
    /// Subjective quality, 1 to 5
    pub sleep_quality_rating: i64,
    /// When sleep started
    pub sleep_start_time: NaiveDateTime,
    /// When sleep ended
    pub sleep_end_time: NaiveDateTime,
}

/// Per-user preference row; the user id doubles as the primary key, so each
/// user holds at most one row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreference {
    /// Owning user and primary key
    pub user_id: i64,
    /// Headline goal, e.g. "Lose Weight"
    pub fitness_goal: Option<String>,
    /// Free-text dietary restrictions
    pub dietary_restrictions: Option<String>,
    /// Free-text preferred exercises
    pub preferred_exercises: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_negative_age_rejected() {
        let user = NewUser::new("JohnDoe", -25).with_gender("Male");
        let err = user.validate().unwrap_err();
        assert!(err.code.is_validation());
    }

    #[test]
    fn test_new_user_empty_name_rejected() {
        assert!(NewUser::new("  ", 30).validate().is_err());
    }

    #[test]
    fn test_new_user_valid() {
        let user = NewUser::new("JohnDoe", 30)
            .with_gender("Male")
            .with_body(180.0, 5.9)
            .with_contact("john@example.com");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_goal_progress_bounds() {
        let mut goal = NewGoal {
            user_id: 1,
            goal_type: "Weight Loss".into(),
            goal_value: 20.0,
            progress_value: 5.0,
        };
        assert!(goal.validate().is_ok());

        goal.progress_value = 25.0;
        assert!(goal.validate().is_err());

        goal.progress_value = -1.0;
        assert!(goal.validate().is_err());
    }

    #[test]
    fn test_sleep_quality_rating_bounds() {
        let start =
            NaiveDateTime::parse_from_str("2023-10-15 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let mut record = NewSleepRecord {
            user_id: 1,
            sleep_duration_minutes: 480,
            sleep_quality_rating: 5,
            sleep_start_time: start,
            sleep_end_time: start + chrono::Duration::minutes(480),
        };
        assert!(record.validate().is_ok());

        record.sleep_quality_rating = 0;
        assert!(record.validate().is_err());

        record.sleep_quality_rating = 6;
        assert!(record.validate().is_err());
    }
}
