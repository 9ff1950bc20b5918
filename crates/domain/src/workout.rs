use chrono::NaiveDate;

/// A logged workout session.
///
/// Records are appended by the logging subsystem and read-only to the engine.
/// The date is truncated to the day for streak purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutRecord {
    pub date: NaiveDate,
    pub workout_type: String,
    pub calories_burned: u32,
    pub completed: bool,
}
