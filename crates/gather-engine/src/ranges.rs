//! Contiguous-window enumeration with incremental intersection.
//!
//! For each date the populated slot indices are walked in ascending order.
//! Every start index is widened one slot at a time while the slots stay
//! contiguous, carrying the set of participants present in *every* slot so
//! far. Widening stops at the first gap or as soon as that set is empty,
//! since an intersection can only shrink.
//!
//! ```text
//! slots:  14 {a,b,c}   15 {a,b}   16 {a}   18 {a,b}
//!
//! [14,14] {a,b,c}   [14,15] {a,b}   [14,16] {a}
//! [15,15] {a,b}     [15,16] {a}
//! [16,16] {a}
//! [18,18] {a,b}     (17 is a gap: nothing reaches across it)
//! ```

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::index::{DateSlotIndex, SlotUsers};
use crate::selection::UserId;

/// Slot index used for both ends of a whole-day window.
pub const ALL_DAY_SLOT: i32 = -1;

/// A candidate window: a contiguous run of slots on one date and the
/// participants available throughout it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotWindow {
    pub date: String,
    pub start: i32,
    /// Inclusive. Equal to `start` for a single slot.
    pub end: i32,
    pub users: BTreeSet<UserId>,
}

impl SlotWindow {
    pub fn count(&self) -> usize {
        self.users.len()
    }

    /// Number of slots spanned beyond the first.
    pub fn width(&self) -> i32 {
        self.end - self.start
    }

    /// True when the two windows share a date and at least one slot.
    pub fn overlaps(&self, other: &SlotWindow) -> bool {
        self.date == other.date && ranges_overlap((self.start, self.end), (other.start, other.end))
    }
}

/// Inclusive range overlap: `a.start <= b.end && b.start <= a.end`.
pub fn ranges_overlap(a: (i32, i32), b: (i32, i32)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

/// Enumerate every contiguous window with a non-empty common participant set,
/// across all dates of `index`, ordered by date then start then end.
pub fn enumerate_windows(index: &DateSlotIndex) -> Vec<SlotWindow> {
    let windows: Vec<SlotWindow> = index
        .dates()
        .flat_map(|(date, slots)| enumerate_date_windows(date, slots))
        .collect();

    debug!(
        "enumerated {} candidate windows over {} dates",
        windows.len(),
        index.len()
    );

    windows
}

/// Enumerate the contiguous windows of a single date.
pub fn enumerate_date_windows(date: &str, slots: &SlotUsers) -> Vec<SlotWindow> {
    let sorted: Vec<(i32, &BTreeSet<UserId>)> = slots.iter().map(|(&s, u)| (s, u)).collect();
    let mut windows = Vec::new();

    for (i, &(start, start_users)) in sorted.iter().enumerate() {
        if start_users.is_empty() {
            continue;
        }

        let mut common = start_users.clone();
        let mut end = start;
        windows.push(SlotWindow {
            date: date.to_string(),
            start,
            end,
            users: common.clone(),
        });

        for &(next, next_users) in &sorted[i + 1..] {
            if next != end + 1 {
                break;
            }
            // Fresh set per step; earlier windows keep their own snapshot.
            common = common.intersection(next_users).copied().collect();
            if common.is_empty() {
                break;
            }
            end = next;
            windows.push(SlotWindow {
                date: date.to_string(),
                start,
                end,
                users: common.clone(),
            });
        }
    }

    trace!(
        "date {}: {} populated slots, {} windows",
        date,
        sorted.len(),
        windows.len()
    );

    windows
}
