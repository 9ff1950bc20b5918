#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Deterministic analytics engine for logged fitness activity.
//!
//! The engine turns raw user-logged records and a person's physical
//! parameters into a personalized nutrition target profile and a rolling
//! dashboard of behavioral statistics. It performs no I/O and holds no state
//! between calls. [`derive_profile`] and [`compute_stats`] operate on
//! disjoint, immutable inputs and may run concurrently; [`validate`] checks a
//! derived profile afterwards.

mod error;
mod metrics;
mod nutrition;
mod statistics;
mod validation;
mod workout;

pub use error::InvalidInputError;
pub use metrics::{MetricSample, most_recent_weight};
pub use nutrition::{
    ActivityLevel, AnthropometricInput, ExperienceTier, Goal, MIN_TARGET_CALORIES, MacroGoals,
    NutritionProfile, Sex, derive_profile, macro_goals, protein_per_kg, protein_requirement,
    target_calories,
};
pub use statistics::{
    CALORIE_WINDOW_DAYS, DashboardStats, WEEKLY_SESSION_TARGET, compute_stats, workout_streak,
};
pub use validation::{MIN_FAT_SHARE, MIN_PROTEIN_SHARE, ValidationWarning, validate};
pub use workout::WorkoutRecord;
