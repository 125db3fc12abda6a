//! Ranking and non-overlapping Top-N selection.
//!
//! Candidates are ordered by:
//!
//! 1. participant count, descending
//! 2. width (`end - start`), descending
//! 3. date, ascending
//! 4. start slot, ascending
//!
//! The sorted list is then scanned greedily, accepting a window only if it
//! shares no slot with a window already accepted on the same date. Nested
//! variants of an accepted window (a 1-hour slice of an accepted 3-hour
//! range, say) never reach the shortlist.

use std::cmp::Ordering;

use log::debug;

use crate::ranges::SlotWindow;

/// Default shortlist length.
pub const DEFAULT_TOP_N: usize = 3;

/// Total order used to rank TIME windows.
pub fn rank_order(a: &SlotWindow, b: &SlotWindow) -> Ordering {
    b.count()
        .cmp(&a.count())
        .then_with(|| b.width().cmp(&a.width()))
        .then_with(|| a.date.cmp(&b.date))
        .then_with(|| a.start.cmp(&b.start))
}

/// Rank `windows` and keep up to `n` that do not overlap on the same date.
pub fn select_top_n(mut windows: Vec<SlotWindow>, n: usize) -> Vec<SlotWindow> {
    windows.sort_by(rank_order);

    let mut result: Vec<SlotWindow> = Vec::with_capacity(n);

    for window in windows {
        if result.len() >= n {
            break;
        }
        if result.iter().any(|accepted| accepted.overlaps(&window)) {
            continue;
        }
        result.push(window);
    }

    debug!("selected {} of at most {} windows", result.len(), n);
    result
}
