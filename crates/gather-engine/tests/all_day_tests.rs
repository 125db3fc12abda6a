//! Tests for ALL_DAY summaries.

use gather_engine::all_day::date_users;
use gather_engine::{compute_all_day_summary, ParticipantSelection, SummaryOptions, ALL_DAY_SLOT};

fn voter(id: u64, dates: &[&str]) -> ParticipantSelection {
    dates.iter().fold(ParticipantSelection::new(id, 60), |sel, date| {
        sel.with_slots(date, [])
    })
}

#[test]
fn every_window_spans_the_whole_day() {
    let selections = vec![
        voter(1, &["2024-02-15", "2024-02-16"]),
        voter(2, &["2024-02-15"]),
    ];

    let result = compute_all_day_summary(&selections, 2, &SummaryOptions::default());

    assert_eq!(result.best_windows.len(), 2);
    for window in &result.best_windows {
        assert_eq!(window.start_slot_index, ALL_DAY_SLOT);
        assert_eq!(window.end_slot_index, ALL_DAY_SLOT);
        assert!(window.is_all_day());
        assert!(!window.is_range());
    }
}

#[test]
fn dates_rank_by_count_then_date() {
    let selections = vec![
        voter(1, &["2024-02-17", "2024-02-16", "2024-02-15"]),
        voter(2, &["2024-02-17", "2024-02-15"]),
        voter(3, &["2024-02-17"]),
    ];

    let result = compute_all_day_summary(&selections, 3, &SummaryOptions::default());

    let ranked: Vec<(&str, usize, &str)> = result
        .best_windows
        .iter()
        .map(|w| (w.date.as_str(), w.count, w.percentage.as_str()))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("2024-02-17", 3, "100%"),
            ("2024-02-15", 2, "67%"),
            ("2024-02-16", 1, "33%"),
        ]
    );
    assert_eq!(result.best_windows[0].participants, vec![1, 2, 3]);
}

#[test]
fn ties_break_on_earlier_date() {
    let selections = vec![voter(1, &["2024-05-03", "2024-05-01", "2024-05-02"])];

    let result = compute_all_day_summary(&selections, 1, &SummaryOptions::default());

    let dates: Vec<&str> = result.best_windows.iter().map(|w| w.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-05-01", "2024-05-02", "2024-05-03"]);
}

#[test]
fn slot_indices_are_ignored() {
    let selections = vec![
        ParticipantSelection::new(1, 60).with_slots("2024-02-15", [9, 10]),
        ParticipantSelection::new(2, 60).with_slots("2024-02-15", [20]),
    ];

    let result = compute_all_day_summary(&selections, 2, &SummaryOptions::default());

    assert_eq!(result.best_windows.len(), 1);
    assert_eq!(result.best_windows[0].count, 2);
}

#[test]
fn shortlist_is_truncated_to_top_n() {
    let selections = vec![voter(
        1,
        &["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"],
    )];

    let default = compute_all_day_summary(&selections, 1, &SummaryOptions::default());
    assert_eq!(default.best_windows.len(), 3);

    let two = compute_all_day_summary(&selections, 1, &SummaryOptions { top_n: 2 });
    assert_eq!(two.best_windows.len(), 2);
}

#[test]
fn zero_total_participants_yields_zero_percent() {
    let result = compute_all_day_summary(&[voter(1, &["2024-02-15"])], 0, &SummaryOptions::default());
    assert_eq!(result.best_windows[0].percentage, "0%");
}

#[test]
fn date_users_collects_each_voter_once() {
    let selections = vec![voter(1, &["2024-02-15"]), voter(1, &["2024-02-15"])];
    let dates = date_users(&selections);
    assert_eq!(dates["2024-02-15"].len(), 1);
}
