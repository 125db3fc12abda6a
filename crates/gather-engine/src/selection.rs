//! Participant selections: the raw input of every aggregation.
//!
//! A selection maps candidate dates (`YYYY-MM-DD`) to the ordered set of slot
//! indices the participant can attend. An empty set on a date means
//! "available that day, no specific time", which is how ALL_DAY meetings
//! record votes.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::timeslot::TimeSlot;

/// Identifier of a participant.
pub type UserId = u64;

/// Granularity of a meeting's voting grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionType {
    /// Dates carry time-of-day slots.
    #[default]
    Time,
    /// Dates are the unit of choice; slots are ignored.
    AllDay,
}

/// One participant's availability across the candidate dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSelection {
    pub user_id: UserId,
    /// Interval the slot indices were recorded under.
    #[serde(default = "default_interval")]
    pub interval_minutes: i32,
    /// Date → slot indices the participant can attend.
    #[serde(default)]
    pub selections: BTreeMap<String, BTreeSet<i32>>,
}

fn default_interval() -> i32 {
    TimeSlot::DEFAULT_INTERVAL_MINUTES
}

impl ParticipantSelection {
    /// An empty selection for `user_id` under `interval_minutes`.
    pub fn new(user_id: UserId, interval_minutes: i32) -> Self {
        Self {
            user_id,
            interval_minutes,
            selections: BTreeMap::new(),
        }
    }

    /// Add slot indices on `date`. Passing no slots marks the whole day.
    pub fn with_slots<I>(mut self, date: &str, slots: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        self.selections
            .entry(date.to_string())
            .or_default()
            .extend(slots);
        self
    }

    /// Add `HH:mm` start times on `date`, converted under this selection's interval.
    ///
    /// # Errors
    /// Propagates the first [`TimeSlot::from_time_string`] failure.
    pub fn with_times(self, date: &str, times: &[&str]) -> Result<Self> {
        let slots = time_strings_to_slots(times, self.interval_minutes)?;
        Ok(self.with_slots(date, slots))
    }

    /// Dates this participant voted for, ascending.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.selections.keys().map(String::as_str)
    }
}

/// Convert `HH:mm` start times into an ordered set of slot indices.
pub fn time_strings_to_slots(times: &[&str], interval_minutes: i32) -> Result<BTreeSet<i32>> {
    times
        .iter()
        .map(|t| TimeSlot::from_time_string(t, interval_minutes).map(|s| s.slot_index()))
        .collect()
}

/// Render slot indices back to their `HH:mm` start times.
pub fn slots_to_time_strings<'a, I>(slots: I, interval_minutes: i32) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a i32>,
{
    slots
        .into_iter()
        .map(|&index| TimeSlot::from_index(index, interval_minutes).map(|s| s.to_time_string()))
        .collect()
}

/// Number of distinct participants across `selections`.
pub fn count_participants(selections: &[ParticipantSelection]) -> usize {
    selections
        .iter()
        .map(|s| s.user_id)
        .collect::<BTreeSet<_>>()
        .len()
}
