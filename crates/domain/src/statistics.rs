use chrono::{Duration, NaiveDate};
use log::debug;

use crate::{MetricSample, WorkoutRecord, most_recent_weight};

/// Length of the trailing window used for the calorie total.
pub const CALORIE_WINDOW_DAYS: i64 = 30;

/// Number of sessions per week considered full goal progress.
pub const WEEKLY_SESSION_TARGET: u32 = 4;

/// Behavioral statistics derived from the logged records.
///
/// Recomputed on every request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub workout_streak: u32,
    pub total_workouts: u32,
    pub calories_burned_30d: u32,
    pub weekly_goal_progress: u8,
    pub most_recent_weight: Option<f32>,
}

#[must_use]
pub fn compute_stats(
    sessions: &[WorkoutRecord],
    metrics: &[MetricSample],
    as_of: NaiveDate,
) -> DashboardStats {
    let calories_burned_30d = sessions
        .iter()
        .filter(|s| within_trailing_window(s.date, as_of, CALORIE_WINDOW_DAYS))
        .map(|s| s.calories_burned)
        .sum();

    #[allow(clippy::cast_possible_truncation)]
    let sessions_this_week = sessions
        .iter()
        .filter(|s| within_trailing_window(s.date, as_of, 7))
        .count() as u32;

    #[allow(clippy::cast_possible_truncation)]
    let stats = DashboardStats {
        workout_streak: workout_streak(sessions, as_of),
        total_workouts: sessions.len() as u32,
        calories_burned_30d,
        weekly_goal_progress: (sessions_this_week * 100 / WEEKLY_SESSION_TARGET).min(100) as u8,
        most_recent_weight: most_recent_weight(metrics),
    };

    debug!(
        "computed dashboard stats as of {as_of}: streak {}, {} workouts",
        stats.workout_streak, stats.total_workouts
    );

    stats
}

/// Count consecutive days with at least one session, ending at `as_of`.
///
/// Multiple sessions on the same day count once. Sessions dated after `as_of`
/// neither extend nor break the streak.
#[must_use]
pub fn workout_streak(sessions: &[WorkoutRecord], as_of: NaiveDate) -> u32 {
    let mut days = sessions.iter().map(|s| s.date).collect::<Vec<_>>();
    days.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0;
    let mut cursor = as_of;

    for day in days {
        if day > cursor {
            continue;
        }
        if day < cursor {
            break;
        }
        streak += 1;
        cursor -= Duration::days(1);
    }

    streak
}

fn within_trailing_window(date: NaiveDate, as_of: NaiveDate, days: i64) -> bool {
    date <= as_of && date > as_of - Duration::days(days)
}
