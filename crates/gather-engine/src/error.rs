//! Error types for gather-engine operations.

use thiserror::Error;

/// Errors raised while converting slots or aggregating selections.
///
/// Every variant is a deterministic function of the input: callers fix the
/// input rather than retry.
#[derive(Error, Debug)]
pub enum GatherError {
    /// The time string was not two colon-separated numeric fields.
    #[error("Invalid time format: '{0}' (expected HH:mm)")]
    InvalidTimeFormat(String),

    #[error("Invalid hour: {0} (must be between 0 and 23)")]
    InvalidHour(i32),

    #[error("Invalid minute: {0} (must be between 0 and 59)")]
    InvalidMinute(i32),

    /// The time of day does not fall on a slot boundary.
    #[error("Time '{time}' is not aligned to the {interval_minutes}-minute interval")]
    MisalignedTime { time: String, interval_minutes: i32 },

    #[error("Slot index {index} out of range [0, {max}] for a {interval_minutes}-minute interval")]
    SlotIndexOutOfRange {
        index: i32,
        interval_minutes: i32,
        max: i32,
    },

    /// The interval is non-positive or does not evenly divide a day.
    #[error("Invalid interval: {0} minutes (must be positive and divide 1440)")]
    InvalidInterval(i32),

    /// A selection was recorded under a different interval than the aggregation.
    #[error("Selection of user {user_id} uses a {found}-minute interval, expected {expected}")]
    IntervalMismatch {
        user_id: u64,
        expected: i32,
        found: i32,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GatherError>;
