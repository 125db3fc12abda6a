//! Date → slot → participants index.
//!
//! Built fresh for every aggregation call from the raw selections. Both levels
//! are ordered maps so iteration is deterministic regardless of the order the
//! selections arrived in.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::error::{GatherError, Result};
use crate::selection::{ParticipantSelection, UserId};
use crate::timeslot::{slots_per_day, TimeSlot};

/// Slot index → participants available in that slot, for one date.
pub type SlotUsers = BTreeMap<i32, BTreeSet<UserId>>;

/// Availability of every participant, keyed by date then slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSlotIndex {
    dates: BTreeMap<String, SlotUsers>,
}

impl DateSlotIndex {
    /// Index every `(date, slot)` each participant selected.
    ///
    /// Performs no validation; see [`DateSlotIndex::build_checked`].
    pub fn build(selections: &[ParticipantSelection]) -> Self {
        let mut dates: BTreeMap<String, SlotUsers> = BTreeMap::new();

        for selection in selections {
            for (date, slots) in &selection.selections {
                let slot_users = dates.entry(date.clone()).or_default();
                for &slot in slots {
                    slot_users.entry(slot).or_default().insert(selection.user_id);
                }
            }
        }

        debug!(
            "indexed {} selections across {} dates",
            selections.len(),
            dates.len()
        );

        Self { dates }
    }

    /// Like [`DateSlotIndex::build`], but first checks that every selection was
    /// recorded under `interval_minutes` and that every slot index exists in a
    /// day of that interval.
    ///
    /// # Errors
    /// Returns `GatherError::InvalidInterval`, `GatherError::IntervalMismatch`,
    /// or `GatherError::SlotIndexOutOfRange` for the first offending input.
    pub fn build_checked(
        selections: &[ParticipantSelection],
        interval_minutes: i32,
    ) -> Result<Self> {
        slots_per_day(interval_minutes)?;

        for selection in selections {
            if selection.interval_minutes != interval_minutes {
                return Err(GatherError::IntervalMismatch {
                    user_id: selection.user_id,
                    expected: interval_minutes,
                    found: selection.interval_minutes,
                });
            }
            for &slot in selection.selections.values().flatten() {
                TimeSlot::from_index(slot, interval_minutes)?;
            }
        }

        Ok(Self::build(selections))
    }

    /// Dates with their slot maps, ascending by date.
    pub fn dates(&self) -> impl Iterator<Item = (&str, &SlotUsers)> {
        self.dates.iter().map(|(date, slots)| (date.as_str(), slots))
    }

    pub fn slots(&self, date: &str) -> Option<&SlotUsers> {
        self.dates.get(date)
    }

    /// Participants available at `slot` on `date`.
    pub fn users_at(&self, date: &str, slot: i32) -> Option<&BTreeSet<UserId>> {
        self.dates.get(date).and_then(|slots| slots.get(&slot))
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
