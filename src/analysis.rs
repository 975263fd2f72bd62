// ABOUTME: Query timing comparison: a fixed fixture of equivalent query pairs
// ABOUTME: Times each phrasing once, prints report lines, and renders a terminal bar chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Project

//! Query timing comparison.
//!
//! A fixed, table-driven list of query pairs: each pair phrases the same
//! question twice, once with a correlated subquery, self-join, or redundant
//! predicate, and once simplified. Every query is executed uniformly and
//! timed with a single wall-clock sample; there is no retry and no
//! statistical aggregation. Output is a line-per-query report plus a
//! horizontal bar chart, nothing is persisted.

use crate::database::Database;
use crate::errors::AppResult;
use std::fmt::Write as _;
use std::time::Instant;
use tracing::debug;

/// One comparison: two phrasings of the same question
#[derive(Debug, Clone, Copy)]
pub struct QueryPair {
    /// Report label, e.g. "Query 1"
    pub label: &'static str,
    /// What the redundant phrasing does differently
    pub description: &'static str,
    /// The redundant phrasing
    pub original: &'static str,
    /// The simplified phrasing
    pub simplified: &'static str,
}

/// The fixed comparison fixture. Pairs mirror the classic anti-pattern
/// shapes: correlated subqueries, self-joins, redundant predicates, and
/// redundant joins.
pub const QUERY_PAIRS: &[QueryPair] = &[
    QueryPair {
        label: "Query 1",
        description: "exercise logs via user-name subquery vs direct id filter",
        original: "SELECT exercise_type, duration_minutes, calories_burned \
                   FROM exercise_logs \
                   WHERE user_id IN (SELECT id FROM users WHERE user_name = 'JohnDoe')",
        simplified: "SELECT exercise_type, duration_minutes, calories_burned \
                     FROM exercise_logs WHERE user_id = 1",
    },
    QueryPair {
        label: "Query 2",
        description: "goals via self-join vs direct read",
        original: "SELECT g.goal_type, g.goal_value, p.progress_value \
                   FROM goals_and_progress g \
                   JOIN goals_and_progress p ON g.user_id = p.user_id \
                   WHERE g.user_id = 1",
        simplified: "SELECT goal_type, goal_value, progress_value \
                     FROM goals_and_progress WHERE user_id = 1",
    },
    QueryPair {
        label: "Query 3",
        description: "goal count with redundant predicate vs without",
        original: "SELECT COUNT(*) AS number_of_goals \
                   FROM goals_and_progress WHERE user_id = 1 AND goal_value > 0",
        simplified: "SELECT COUNT(*) AS number_of_goals \
                     FROM goals_and_progress WHERE user_id = 1",
    },
    QueryPair {
        label: "Query 4",
        description: "health metrics with redundant join vs direct read",
        original: "SELECT h.weight, h.waist_circumference, h.hip_circumference, h.body_fat_percentage \
                   FROM health_metrics h \
                   JOIN exercise_logs e ON h.user_id = e.user_id \
                   WHERE h.user_id = 1",
        simplified: "SELECT weight, waist_circumference, hip_circumference, body_fat_percentage \
                     FROM health_metrics WHERE user_id = 1",
    },
    QueryPair {
        label: "Query 5",
        description: "nutrition logs via subquery vs direct id filter",
        original: "SELECT meal_name, food_items, meal_time \
                   FROM nutrition_logs \
                   WHERE user_id = (SELECT id FROM users WHERE user_name = 'JohnDoe') \
                     AND DATE(meal_time) = '2023-10-01'",
        simplified: "SELECT meal_name, food_items, meal_time \
                     FROM nutrition_logs \
                     WHERE user_id = 1 AND DATE(meal_time) = '2023-10-01'",
    },
    QueryPair {
        label: "Query 6",
        description: "sleep records via self-join vs direct read",
        original: "SELECT s.sleep_duration_minutes, s.sleep_quality_rating, t.sleep_start_time, t.sleep_end_time \
                   FROM sleep_records s \
                   JOIN sleep_records t ON s.user_id = t.user_id \
                   WHERE s.user_id = 1",
        simplified: "SELECT sleep_duration_minutes, sleep_quality_rating, sleep_start_time, sleep_end_time \
                     FROM sleep_records WHERE user_id = 1",
    },
    QueryPair {
        label: "Query 7",
        description: "preferences with redundant predicate vs direct read",
        original: "SELECT fitness_goal, dietary_restrictions, preferred_exercises \
                   FROM user_preferences \
                   WHERE user_id = 1 AND fitness_goal = 'Lose Weight'",
        simplified: "SELECT fitness_goal, dietary_restrictions, preferred_exercises \
                     FROM user_preferences WHERE user_id = 1",
    },
    QueryPair {
        label: "Query 8",
        description: "total exercise duration via subquery vs direct id filter",
        original: "SELECT SUM(duration_minutes) AS total_exercise_duration \
                   FROM exercise_logs \
                   WHERE user_id = (SELECT id FROM users WHERE user_name = 'JohnDoe')",
        simplified: "SELECT SUM(duration_minutes) AS total_exercise_duration \
                     FROM exercise_logs WHERE user_id = 1",
    },
    QueryPair {
        label: "Query 9",
        description: "average session length via self-join vs direct aggregate",
        original: "SELECT AVG(a.duration_minutes) AS average_session_minutes \
                   FROM exercise_logs a \
                   JOIN exercise_logs b ON a.user_id = b.user_id \
                   WHERE a.user_id = 1",
        simplified: "SELECT AVG(duration_minutes) AS average_session_minutes \
                     FROM exercise_logs WHERE user_id = 1",
    },
    QueryPair {
        label: "Query 10",
        description: "most frequent exercise type via subquery vs direct id filter",
        original: "SELECT exercise_type AS most_frequent_exercise_type \
                   FROM exercise_logs \
                   WHERE user_id = (SELECT id FROM users WHERE user_name = 'JohnDoe') \
                   GROUP BY exercise_type ORDER BY COUNT(*) DESC LIMIT 1",
        simplified: "SELECT exercise_type AS most_frequent_exercise_type \
                     FROM exercise_logs WHERE user_id = 1 \
                     GROUP BY exercise_type ORDER BY COUNT(*) DESC LIMIT 1",
    },
    QueryPair {
        label: "Query 11",
        description: "BMI via self-join vs direct expression",
        original: "SELECT (a.weight / (b.height * b.height)) AS bmi \
                   FROM users a JOIN users b ON a.id = b.id WHERE a.id = 1",
        simplified: "SELECT (weight / (height * height)) AS bmi \
                     FROM users WHERE id = 1",
    },
    QueryPair {
        label: "Query 12",
        description: "average nightly sleep hours via subquery vs direct id filter",
        original: "SELECT AVG(sleep_duration_minutes / 60.0) AS average_sleep_hours \
                   FROM sleep_records \
                   WHERE user_id = (SELECT id FROM users WHERE user_name = 'JohnDoe')",
        simplified: "SELECT AVG(sleep_duration_minutes / 60.0) AS average_sleep_hours \
                     FROM sleep_records WHERE user_id = 1",
    },
    QueryPair {
        label: "Query 13",
        description: "average sleep quality with redundant join vs direct aggregate",
        original: "SELECT AVG(s.sleep_quality_rating) AS average_sleep_quality \
                   FROM sleep_records s \
                   JOIN users u ON s.user_id = u.id \
                   WHERE s.user_id = 1",
        simplified: "SELECT AVG(sleep_quality_rating) AS average_sleep_quality \
                     FROM sleep_records WHERE user_id = 1",
    },
    QueryPair {
        label: "Query 14",
        description: "latest exercise session via subquery vs direct id filter",
        original: "SELECT exercise_type, duration_minutes, logged_at AS last_exercise_date \
                   FROM exercise_logs \
                   WHERE user_id = (SELECT id FROM users WHERE user_name = 'JohnDoe') \
                   ORDER BY logged_at DESC LIMIT 1",
        simplified: "SELECT exercise_type, duration_minutes, logged_at AS last_exercise_date \
                     FROM exercise_logs WHERE user_id = 1 \
                     ORDER BY logged_at DESC LIMIT 1",
    },
];

/// Wall-clock timings for one pair
#[derive(Debug, Clone, Copy)]
pub struct PairTiming {
    /// Report label, e.g. "Query 1"
    pub label: &'static str,
    /// Seconds spent on the redundant phrasing
    pub original_secs: f64,
    /// Seconds spent on the simplified phrasing
    pub simplified_secs: f64,
}

/// Execute one query and return the elapsed wall-clock seconds.
///
/// One sample, rows fetched and discarded; the caller compares phrasings,
/// not result sets.
///
/// # Errors
///
/// Returns an error if the query fails
pub async fn time_query(db: &Database, sql: &str) -> AppResult<f64> {
    let started = Instant::now();
    sqlx::query(sql).fetch_all(db.pool()).await?;
    Ok(started.elapsed().as_secs_f64())
}

/// Run every pair in [`QUERY_PAIRS`] and collect the timings in fixture
/// order
///
/// # Errors
///
/// Returns an error if any query fails
pub async fn run_comparison(db: &Database) -> AppResult<Vec<PairTiming>> {
    let mut timings = Vec::with_capacity(QUERY_PAIRS.len());
    for pair in QUERY_PAIRS {
        debug!("{}: {}", pair.label, pair.description);
        let original_secs = time_query(db, pair.original).await?;
        let simplified_secs = time_query(db, pair.simplified).await?;
        timings.push(PairTiming {
            label: pair.label,
            original_secs,
            simplified_secs,
        });
    }
    Ok(timings)
}

/// Render the two-lines-per-pair report the analysis binary prints
#[must_use]
pub fn format_report(timings: &[PairTiming]) -> String {
    let mut out = String::new();
    for timing in timings {
        let _ = writeln!(
            out,
            "{} (Original): {:.6}",
            timing.label, timing.original_secs
        );
        let _ = writeln!(
            out,
            "{} (Optimized): {:.6}",
            timing.label, timing.simplified_secs
        );
    }
    out
}

/// Render a horizontal bar chart of the timings, widest bar `width`
/// characters, both phrasings per pair
#[must_use]
pub fn render_bar_chart(timings: &[PairTiming], width: usize) -> String {
    let max_secs = timings
        .iter()
        .flat_map(|t| [t.original_secs, t.simplified_secs])
        .fold(0.0_f64, f64::max);

    let mut out = String::from("Query Execution Times (Original vs. Optimized)\n");
    for timing in timings {
        let _ = writeln!(
            out,
            "{:<9} original  |{} {:.6}s",
            timing.label,
            bar(timing.original_secs, max_secs, width),
            timing.original_secs
        );
        let _ = writeln!(
            out,
            "{:<9} optimized |{} {:.6}s",
            "",
            bar(timing.simplified_secs, max_secs, width),
            timing.simplified_secs
        );
    }
    out
}

fn bar(secs: f64, max_secs: f64, width: usize) -> String {
    if max_secs <= 0.0 {
        return String::new();
    }
    let len = ((secs / max_secs) * width as f64).round() as usize;
    "#".repeat(len.min(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_has_fourteen_pairs() {
        assert_eq!(QUERY_PAIRS.len(), 14);
    }

    #[test]
    fn test_fixture_labels_are_unique_and_numbered() {
        for (i, pair) in QUERY_PAIRS.iter().enumerate() {
            assert_eq!(pair.label, format!("Query {}", i + 1));
            assert!(!pair.original.is_empty());
            assert!(!pair.simplified.is_empty());
        }
    }

    #[test]
    fn test_report_has_two_lines_per_pair() {
        let timings = vec![
            PairTiming {
                label: "Query 1",
                original_secs: 0.002,
                simplified_secs: 0.001,
            },
            PairTiming {
                label: "Query 2",
                original_secs: 0.004,
                simplified_secs: 0.003,
            },
        ];
        let report = format_report(&timings);
        assert_eq!(report.lines().count(), 4);
        assert!(report.contains("Query 1 (Original): 0.002000"));
        assert!(report.contains("Query 2 (Optimized): 0.003000"));
    }

    #[test]
    fn test_bar_chart_scales_to_width() {
        let timings = vec![PairTiming {
            label: "Query 1",
            original_secs: 0.5,
            simplified_secs: 0.25,
        }];
        let chart = render_bar_chart(&timings, 40);
        assert!(chart.contains(&"#".repeat(40)));
        assert!(chart.contains(&"#".repeat(20)));
    }

    #[test]
    fn test_bar_chart_handles_all_zero_timings() {
        let timings = vec![PairTiming {
            label: "Query 1",
            original_secs: 0.0,
            simplified_secs: 0.0,
        }];
        let chart = render_bar_chart(&timings, 40);
        assert!(!chart.contains('#'));
    }
}
