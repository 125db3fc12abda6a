//! # gather-engine
//!
//! Availability aggregation and best-window selection for group meetings.
//!
//! A host proposes candidate dates (and optionally time-of-day slots);
//! participants mark what they can attend. The engine finds the contiguous
//! windows where the most participants overlap, merges adjacent agreeing
//! slots into one range, and returns a short, non-overlapping, deterministically
//! ordered shortlist.
//!
//! ## Quick start
//!
//! ```rust
//! use gather_engine::{compute_time_summary, ParticipantSelection, SummaryOptions};
//!
//! let selections: Vec<ParticipantSelection> = (1..=3)
//!     .map(|user| ParticipantSelection::new(user, 60).with_slots("2024-02-15", [14, 15]))
//!     .collect();
//!
//! let summary = compute_time_summary(60, &selections, 3, &SummaryOptions::default()).unwrap();
//! let best = &summary.best_windows[0];
//! assert_eq!((best.start_slot_index, best.end_slot_index, best.count), (14, 15, 3));
//! assert_eq!(best.percentage, "100%");
//! ```
//!
//! ## Modules
//!
//! - [`timeslot`] — slot index ↔ `HH:mm` conversion under a minute interval
//! - [`selection`] — participant selection records and slot-string helpers
//! - [`index`] — date → slot → participants index
//! - [`ranges`] — contiguous-window enumeration with incremental intersection
//! - [`ranking`] — comparator and non-overlapping Top-N selection
//! - [`all_day`] — whole-day aggregation for meetings without time slots
//! - [`summary`] — result records and the public entry points
//! - [`format`] — time-range and date labels
//! - [`request`] — JSON request document
//! - [`report`] — plain-text digest of votes and shortlist
//! - [`error`] — Error types

pub mod all_day;
pub mod error;
pub mod format;
pub mod index;
pub mod ranges;
pub mod ranking;
pub mod report;
pub mod request;
pub mod selection;
pub mod summary;
pub mod timeslot;

pub use error::GatherError;
pub use index::DateSlotIndex;
pub use ranges::{SlotWindow, ALL_DAY_SLOT};
pub use ranking::DEFAULT_TOP_N;
pub use report::render_report;
pub use request::SummaryRequest;
pub use selection::{count_participants, ParticipantSelection, SelectionType, UserId};
pub use summary::{
    compute_all_day_summary, compute_summary, compute_time_summary, BestWindow, SummaryOptions,
    SummaryResult,
};
pub use timeslot::TimeSlot;
