//! Whole-day aggregation for meetings without a time-of-day axis.
//!
//! Anyone who listed a date counts as available that day; slot indices are
//! ignored. There is nothing to merge, so each date yields exactly one
//! window with both ends set to [`ALL_DAY_SLOT`].

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::ranges::{SlotWindow, ALL_DAY_SLOT};
use crate::selection::{ParticipantSelection, UserId};

/// Date → participants who listed it.
pub fn date_users(selections: &[ParticipantSelection]) -> BTreeMap<String, BTreeSet<UserId>> {
    let mut dates: BTreeMap<String, BTreeSet<UserId>> = BTreeMap::new();
    for selection in selections {
        for date in selection.dates() {
            dates
                .entry(date.to_string())
                .or_default()
                .insert(selection.user_id);
        }
    }
    dates
}

/// One whole-day window per voted date, in date order.
pub fn enumerate_all_day_windows(selections: &[ParticipantSelection]) -> Vec<SlotWindow> {
    date_users(selections)
        .into_iter()
        .map(|(date, users)| SlotWindow {
            date,
            start: ALL_DAY_SLOT,
            end: ALL_DAY_SLOT,
            users,
        })
        .collect()
}

/// Count descending, then date ascending.
pub fn all_day_order(a: &SlotWindow, b: &SlotWindow) -> Ordering {
    b.count().cmp(&a.count()).then_with(|| a.date.cmp(&b.date))
}

/// Rank whole-day windows and keep the first `n`.
pub fn select_all_day(mut windows: Vec<SlotWindow>, n: usize) -> Vec<SlotWindow> {
    windows.sort_by(all_day_order);
    windows.truncate(n);
    debug!("selected {} whole-day windows", windows.len());
    windows
}
