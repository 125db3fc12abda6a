//! Summary assembly: the engine's public entry points.
//!
//! ```text
//! selections ─► DateSlotIndex ─► enumerate_windows ─► select_top_n ─┐
//!          └──► enumerate_all_day_windows ─► select_all_day ────────┴─► SummaryResult
//! ```
//!
//! Every call builds and discards its own index, so summaries can be computed
//! concurrently without coordination.

use serde::{Deserialize, Serialize};

use crate::all_day::{enumerate_all_day_windows, select_all_day};
use crate::error::Result;
use crate::index::DateSlotIndex;
use crate::ranges::{enumerate_windows, SlotWindow, ALL_DAY_SLOT};
use crate::ranking::{select_top_n, DEFAULT_TOP_N};
use crate::selection::{ParticipantSelection, SelectionType, UserId};

/// Tunables for summary computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Maximum number of windows in the shortlist.
    pub top_n: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// A ranked window in the shortlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestWindow {
    pub date: String,
    /// First slot; `-1` for a whole-day window.
    pub start_slot_index: i32,
    /// Last slot, inclusive; `-1` for a whole-day window.
    pub end_slot_index: i32,
    pub count: usize,
    /// Whole-number share of total participants, e.g. `"67%"`.
    pub percentage: String,
    /// Participants available throughout the window, ascending.
    pub participants: Vec<UserId>,
}

impl BestWindow {
    fn from_window(window: SlotWindow, total_participants: usize) -> Self {
        let count = window.count();
        Self {
            date: window.date,
            start_slot_index: window.start,
            end_slot_index: window.end,
            count,
            percentage: format_percentage(count, total_participants),
            participants: window.users.into_iter().collect(),
        }
    }

    pub fn is_range(&self) -> bool {
        self.start_slot_index != self.end_slot_index
    }

    pub fn is_all_day(&self) -> bool {
        self.start_slot_index == ALL_DAY_SLOT && self.end_slot_index == ALL_DAY_SLOT
    }
}

/// The shortlist handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub total_participants: usize,
    pub best_windows: Vec<BestWindow>,
}

/// `round(count * 100 / total)` as `"N%"`; `"0%"` when `total` is zero.
pub fn format_percentage(count: usize, total_participants: usize) -> String {
    if total_participants == 0 {
        return "0%".to_string();
    }
    let pct = (count as f64 * 100.0 / total_participants as f64).round() as u64;
    format!("{}%", pct)
}

/// Shortlist the best contiguous time windows of a TIME meeting.
///
/// # Errors
/// Fails without partial output if the interval is invalid, a selection uses a
/// different interval, or a slot index is outside the day.
pub fn compute_time_summary(
    interval_minutes: i32,
    selections: &[ParticipantSelection],
    total_participants: usize,
    options: &SummaryOptions,
) -> Result<SummaryResult> {
    let index = DateSlotIndex::build_checked(selections, interval_minutes)?;
    let windows = enumerate_windows(&index);
    let best = select_top_n(windows, options.top_n);
    Ok(assemble(best, total_participants))
}

/// Shortlist the best dates of an ALL_DAY meeting.
pub fn compute_all_day_summary(
    selections: &[ParticipantSelection],
    total_participants: usize,
    options: &SummaryOptions,
) -> SummaryResult {
    let windows = enumerate_all_day_windows(selections);
    let best = select_all_day(windows, options.top_n);
    assemble(best, total_participants)
}

/// Dispatch on the meeting's selection type.
pub fn compute_summary(
    selection_type: SelectionType,
    interval_minutes: i32,
    selections: &[ParticipantSelection],
    total_participants: usize,
    options: &SummaryOptions,
) -> Result<SummaryResult> {
    match selection_type {
        SelectionType::Time => {
            compute_time_summary(interval_minutes, selections, total_participants, options)
        }
        SelectionType::AllDay => Ok(compute_all_day_summary(
            selections,
            total_participants,
            options,
        )),
    }
}

fn assemble(windows: Vec<SlotWindow>, total_participants: usize) -> SummaryResult {
    SummaryResult {
        total_participants,
        best_windows: windows
            .into_iter()
            .map(|w| BestWindow::from_window(w, total_participants))
            .collect(),
    }
}
