//! Interval-indexed time-of-day slots.
//!
//! A day is cut into `1440 / interval_minutes` equal buckets. A [`TimeSlot`]
//! names one bucket by its zero-based index and converts to and from the
//! `HH:mm` wall-clock string of the bucket's start.
//!
//! | interval | slots per day | index 1 |
//! |----------|---------------|---------|
//! | 60       | 24            | `01:00` |
//! | 30       | 48            | `00:30` |
//! | 15       | 96            | `00:15` |

use std::fmt;

use crate::error::{GatherError, Result};

const MINUTES_PER_DAY: i32 = 24 * 60;

/// A single time-of-day bucket under a fixed minute interval.
///
/// Two slots are equal only when both the index and the interval match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    slot_index: i32,
    interval_minutes: i32,
}

impl TimeSlot {
    /// Interval used when a meeting does not specify one.
    pub const DEFAULT_INTERVAL_MINUTES: i32 = 60;

    /// Build a slot from its index under `interval_minutes`.
    ///
    /// # Errors
    /// Returns `GatherError::InvalidInterval` if the interval is non-positive or
    /// does not divide 1440, and `GatherError::SlotIndexOutOfRange` if `index`
    /// is outside `[0, slots_per_day - 1]`.
    pub fn from_index(index: i32, interval_minutes: i32) -> Result<Self> {
        let slots_per_day = slots_per_day(interval_minutes)?;
        if !(0..slots_per_day).contains(&index) {
            return Err(GatherError::SlotIndexOutOfRange {
                index,
                interval_minutes,
                max: slots_per_day - 1,
            });
        }
        Ok(Self {
            slot_index: index,
            interval_minutes,
        })
    }

    /// Parse an `HH:mm` string into the slot starting at that time.
    ///
    /// Misaligned times are rejected, never rounded: `"09:15"` under a
    /// 60-minute interval is an error.
    ///
    /// # Errors
    /// Returns `GatherError::InvalidTimeFormat` unless the input is exactly two
    /// colon-separated integers, `InvalidHour`/`InvalidMinute` for out-of-range
    /// components, `MisalignedTime` when the time is not a multiple of the
    /// interval, and the errors of [`TimeSlot::from_index`].
    pub fn from_time_string(time: &str, interval_minutes: i32) -> Result<Self> {
        slots_per_day(interval_minutes)?;

        let mut parts = time.split(':');
        let (hour, minute) = match (parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), None) => (parse_field(h, time)?, parse_field(m, time)?),
            _ => return Err(GatherError::InvalidTimeFormat(time.to_string())),
        };

        if !(0..=23).contains(&hour) {
            return Err(GatherError::InvalidHour(hour));
        }
        if !(0..=59).contains(&minute) {
            return Err(GatherError::InvalidMinute(minute));
        }

        let total_minutes = hour * 60 + minute;
        if total_minutes % interval_minutes != 0 {
            return Err(GatherError::MisalignedTime {
                time: time.to_string(),
                interval_minutes,
            });
        }

        Self::from_index(total_minutes / interval_minutes, interval_minutes)
    }

    pub fn slot_index(&self) -> i32 {
        self.slot_index
    }

    pub fn interval_minutes(&self) -> i32 {
        self.interval_minutes
    }

    pub fn slots_per_day(&self) -> i32 {
        MINUTES_PER_DAY / self.interval_minutes
    }

    /// Hour of the slot's start (0–23).
    pub fn hour(&self) -> i32 {
        self.start_minutes() / 60
    }

    /// Minute of the slot's start (0–59).
    pub fn minute(&self) -> i32 {
        self.start_minutes() % 60
    }

    /// `HH:mm` of the slot's start. Exact inverse of [`TimeSlot::from_time_string`].
    pub fn to_time_string(&self) -> String {
        format_minutes(self.start_minutes())
    }

    /// `HH:mm` of the slot's end boundary; the last slot of the day ends at `24:00`.
    pub fn to_end_time_string(&self) -> String {
        format_minutes(self.start_minutes() + self.interval_minutes)
    }

    pub fn is_before(&self, other: &TimeSlot) -> bool {
        self.slot_index < other.slot_index
    }

    pub fn is_after(&self, other: &TimeSlot) -> bool {
        self.slot_index > other.slot_index
    }

    /// True when `other` immediately follows this slot.
    pub fn is_next_slot(&self, other: &TimeSlot) -> bool {
        self.slot_index + 1 == other.slot_index
    }

    fn start_minutes(&self) -> i32 {
        self.slot_index * self.interval_minutes
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_time_string())
    }
}

/// Number of slots in a day under `interval_minutes`.
///
/// # Errors
/// Returns `GatherError::InvalidInterval` if the interval is non-positive or
/// does not evenly divide 1440.
pub fn slots_per_day(interval_minutes: i32) -> Result<i32> {
    if interval_minutes <= 0 || MINUTES_PER_DAY % interval_minutes != 0 {
        return Err(GatherError::InvalidInterval(interval_minutes));
    }
    Ok(MINUTES_PER_DAY / interval_minutes)
}

fn parse_field(field: &str, time: &str) -> Result<i32> {
    field
        .parse()
        .map_err(|_| GatherError::InvalidTimeFormat(time.to_string()))
}

fn format_minutes(total: i32) -> String {
    format!("{:02}:{:02}", total / 60, total % 60)
}

