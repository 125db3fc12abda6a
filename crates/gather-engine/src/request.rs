//! JSON request document accepted by the CLI and WASM front ends.
//!
//! ```json
//! {
//!   "selection_type": "TIME",
//!   "interval_minutes": 30,
//!   "top_n": 3,
//!   "names": { "1": "alice", "2": "bob" },
//!   "selections": [
//!     { "user_id": 1, "selections": { "2024-02-15": [28, 29] } },
//!     { "user_id": 2, "selections": { "2024-02-15": [29, 30] } }
//!   ]
//! }
//! ```
//!
//! Only `selections` is required. Entries that omit `interval_minutes`
//! inherit the document's interval.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::selection::{count_participants, ParticipantSelection, SelectionType, UserId};
use crate::summary::{compute_summary, SummaryOptions, SummaryResult};
use crate::timeslot::TimeSlot;

/// One participant's entry in a request document.
///
/// Unlike [`ParticipantSelection`], the interval is optional here: an entry
/// that leaves it out takes the document's interval, which is only known once
/// the whole document is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_minutes: Option<i32>,
    #[serde(default)]
    pub selections: BTreeMap<String, BTreeSet<i32>>,
}

impl SelectionEntry {
    /// Engine selection, taking `default_interval` when the entry has none.
    pub fn to_selection(&self, default_interval: i32) -> ParticipantSelection {
        ParticipantSelection {
            user_id: self.user_id,
            interval_minutes: self.interval_minutes.unwrap_or(default_interval),
            selections: self.selections.clone(),
        }
    }
}

/// A complete summary request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub selection_type: SelectionType,
    #[serde(default = "default_interval")]
    pub interval_minutes: i32,
    /// Number of distinct voters; counted from `selections` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_participants: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<usize>,
    pub selections: Vec<SelectionEntry>,
    /// Display names by user id, used by the text report.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub names: BTreeMap<UserId, String>,
}

fn default_interval() -> i32 {
    TimeSlot::DEFAULT_INTERVAL_MINUTES
}

impl SummaryRequest {
    /// Parse a request document.
    ///
    /// # Errors
    /// Returns `GatherError::Json` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The entries as engine selections, inheriting the document interval.
    pub fn participant_selections(&self) -> Vec<ParticipantSelection> {
        self.selections
            .iter()
            .map(|entry| entry.to_selection(self.interval_minutes))
            .collect()
    }

    pub fn options(&self) -> SummaryOptions {
        match self.top_n {
            Some(top_n) => SummaryOptions { top_n },
            None => SummaryOptions::default(),
        }
    }

    /// Explicit total, or the number of distinct voters.
    pub fn total_participants(&self, selections: &[ParticipantSelection]) -> usize {
        self.total_participants
            .unwrap_or_else(|| count_participants(selections))
    }

    /// Display name for `user_id`, `user-<id>` when unnamed.
    pub fn display_name(&self, user_id: UserId) -> String {
        self.names
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| format!("user-{}", user_id))
    }

    /// Compute the summary this document describes.
    pub fn evaluate(&self) -> Result<SummaryResult> {
        let selections = self.participant_selections();
        let total = self.total_participants(&selections);
        compute_summary(
            self.selection_type,
            self.interval_minutes,
            &selections,
            total,
            &self.options(),
        )
    }
}
