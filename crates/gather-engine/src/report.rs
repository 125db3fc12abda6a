//! Plain-text digest of a meeting's votes and shortlist.
//!
//! The output is fully determined by its inputs (ordered maps, ranked
//! windows) so downstream consumers can quote it verbatim.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::format::{date_with_weekday, window_time_range};
use crate::request::SummaryRequest;
use crate::selection::{slots_to_time_strings, SelectionType, UserId};
use crate::summary::SummaryResult;

/// Render `summary` alongside the raw votes of `request`.
///
/// # Errors
/// Fails if a window or selection holds a slot index invalid for the request's
/// interval.
pub fn render_report(request: &SummaryRequest, summary: &SummaryResult) -> Result<String> {
    let selections = request.participant_selections();
    let voters: BTreeSet<UserId> = selections.iter().map(|s| s.user_id).collect();
    let mut out = String::new();

    out.push_str(&format!("Selection Type: {}\n", type_label(request.selection_type)));
    if request.selection_type == SelectionType::Time {
        out.push_str(&format!("Interval: {} minutes\n", request.interval_minutes));
    }
    out.push_str(&format!("Voted Participants: {}\n", voters.len()));
    out.push('\n');

    out.push_str("Best Windows:\n");
    if summary.best_windows.is_empty() {
        out.push_str("(none)\n");
    }
    for (rank, window) in summary.best_windows.iter().enumerate() {
        let when = match window_time_range(window, request.interval_minutes)? {
            Some(range) => format!("{} {}", date_with_weekday(&window.date), range),
            None => date_with_weekday(&window.date),
        };
        out.push_str(&format!("{}. {}\n", rank + 1, when));
        out.push_str(&format!(
            "   Available ({}/{}, {}): {}\n",
            window.count,
            summary.total_participants,
            window.percentage,
            join_names(request, window.participants.iter().copied())
        ));
        let available: BTreeSet<UserId> = window.participants.iter().copied().collect();
        out.push_str(&format!(
            "   Unavailable: {}\n",
            join_names(request, voters.difference(&available).copied())
        ));
    }
    out.push('\n');

    out.push_str("Participant Selections:\n");
    for selection in &selections {
        out.push_str(&format!("- {}:\n", request.display_name(selection.user_id)));
        for (date, slots) in &selection.selections {
            let times = if request.selection_type == SelectionType::AllDay || slots.is_empty() {
                "all day".to_string()
            } else {
                slots_to_time_strings(slots, selection.interval_minutes)?.join(", ")
            };
            out.push_str(&format!("  * {}: {}\n", date_with_weekday(date), times));
        }
    }

    Ok(out)
}

fn type_label(selection_type: SelectionType) -> &'static str {
    match selection_type {
        SelectionType::Time => "TIME",
        SelectionType::AllDay => "ALL_DAY",
    }
}

fn join_names<I>(request: &SummaryRequest, ids: I) -> String
where
    I: Iterator<Item = UserId>,
{
    let names: Vec<String> = ids.map(|id| request.display_name(id)).collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
