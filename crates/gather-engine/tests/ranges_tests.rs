//! Tests for the availability index, window enumeration, and Top-N selection.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use gather_engine::index::DateSlotIndex;
use gather_engine::ranges::{enumerate_date_windows, enumerate_windows, ranges_overlap};
use gather_engine::ranking::{rank_order, select_top_n};
use gather_engine::{GatherError, ParticipantSelection, SlotWindow};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn window(date: &str, start: i32, end: i32, users: &[u64]) -> SlotWindow {
    SlotWindow {
        date: date.to_string(),
        start,
        end,
        users: users.iter().copied().collect(),
    }
}

fn spans(windows: &[SlotWindow]) -> Vec<(i32, i32, usize)> {
    windows.iter().map(|w| (w.start, w.end, w.count())).collect()
}

// ── Index ───────────────────────────────────────────────────────────────────

#[test]
fn index_groups_users_by_date_and_slot() {
    let selections = vec![
        ParticipantSelection::new(1, 60).with_slots("2024-02-15", [9, 10]),
        ParticipantSelection::new(2, 60)
            .with_slots("2024-02-15", [10])
            .with_slots("2024-02-16", [9]),
    ];

    let index = DateSlotIndex::build(&selections);

    assert_eq!(index.len(), 2);
    let dates: Vec<&str> = index.dates().map(|(d, _)| d).collect();
    assert_eq!(dates, vec!["2024-02-15", "2024-02-16"]);
    assert_eq!(
        index.users_at("2024-02-15", 10),
        Some(&BTreeSet::from([1, 2]))
    );
    assert_eq!(index.users_at("2024-02-15", 9), Some(&BTreeSet::from([1])));
    assert_eq!(index.users_at("2024-02-16", 10), None);
    assert_eq!(index.users_at("2024-02-17", 9), None);
}

#[test]
fn index_is_independent_of_selection_order() {
    let a = ParticipantSelection::new(1, 60).with_slots("2024-02-15", [9, 10]);
    let b = ParticipantSelection::new(2, 60).with_slots("2024-02-15", [10, 11]);

    let forward = DateSlotIndex::build(&[a.clone(), b.clone()]);
    let backward = DateSlotIndex::build(&[b, a]);

    assert_eq!(forward, backward);
}

#[test]
fn checked_build_reports_first_invalid_slot() {
    let selections = vec![ParticipantSelection::new(1, 30).with_slots("2024-02-15", [47, 48])];
    let err = DateSlotIndex::build_checked(&selections, 30).unwrap_err();
    assert!(matches!(
        err,
        GatherError::SlotIndexOutOfRange { index: 48, max: 47, .. }
    ));
}

#[test]
fn empty_index() {
    let index = DateSlotIndex::build(&[]);
    assert!(index.is_empty());
    assert!(enumerate_windows(&index).is_empty());
}

// ── Enumeration ─────────────────────────────────────────────────────────────

#[test]
fn enumerates_every_contiguous_sub_range() {
    let selections: Vec<ParticipantSelection> = (1..=2)
        .map(|id| ParticipantSelection::new(id, 60).with_slots("2024-02-15", [14, 15, 16]))
        .collect();
    let index = DateSlotIndex::build(&selections);

    let windows = enumerate_windows(&index);

    assert_eq!(
        spans(&windows),
        vec![
            (14, 14, 2),
            (14, 15, 2),
            (14, 16, 2),
            (15, 15, 2),
            (15, 16, 2),
            (16, 16, 2),
        ]
    );
}

#[test]
fn intersection_shrinks_as_windows_widen() {
    let selections = vec![
        ParticipantSelection::new(1, 60).with_slots("d", [14, 15, 16, 18]),
        ParticipantSelection::new(2, 60).with_slots("d", [14, 15, 18]),
        ParticipantSelection::new(3, 60).with_slots("d", [14]),
    ];
    let index = DateSlotIndex::build(&selections);
    let slots = index.slots("d").unwrap();

    let windows = enumerate_date_windows("d", slots);

    assert_eq!(
        spans(&windows),
        vec![
            (14, 14, 3),
            (14, 15, 2),
            (14, 16, 1),
            (15, 15, 2),
            (15, 16, 1),
            (16, 16, 1),
            (18, 18, 2),
        ]
    );
    assert_eq!(windows[2].users, BTreeSet::from([1]));
}

#[test]
fn earlier_windows_keep_their_own_participants() {
    let selections = vec![
        ParticipantSelection::new(1, 60).with_slots("d", [1, 2]),
        ParticipantSelection::new(2, 60).with_slots("d", [1]),
    ];
    let index = DateSlotIndex::build(&selections);

    let windows = enumerate_windows(&index);

    assert_eq!(windows[0].users, BTreeSet::from([1, 2]));
    assert_eq!(windows[1].users, BTreeSet::from([1]));
}

#[test]
fn disjoint_neighbours_produce_no_merged_window() {
    let selections = vec![
        ParticipantSelection::new(1, 60).with_slots("d", [3]),
        ParticipantSelection::new(2, 60).with_slots("d", [4]),
    ];
    let index = DateSlotIndex::build(&selections);

    let windows = enumerate_windows(&index);

    assert_eq!(spans(&windows), vec![(3, 3, 1), (4, 4, 1)]);
}

// ── Overlap ─────────────────────────────────────────────────────────────────

#[test]
fn range_overlap_is_inclusive() {
    assert!(ranges_overlap((1, 3), (3, 5)));
    assert!(ranges_overlap((2, 2), (1, 4)));
    assert!(!ranges_overlap((1, 2), (3, 4)));
    assert!(!ranges_overlap((5, 6), (1, 4)));
}

#[test]
fn windows_on_different_dates_never_overlap() {
    let a = window("2024-02-15", 9, 10, &[1]);
    let b = window("2024-02-16", 9, 10, &[1]);
    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&window("2024-02-15", 10, 12, &[2])));
}

// ── Ranking ─────────────────────────────────────────────────────────────────

#[test]
fn rank_order_compares_count_then_width_then_date_then_start() {
    let wide_low = window("2024-01-01", 1, 5, &[1]);
    let narrow_high = window("2024-01-02", 7, 7, &[1, 2]);
    assert_eq!(rank_order(&narrow_high, &wide_low), Ordering::Less);

    let wide = window("2024-01-02", 1, 3, &[1]);
    let narrow = window("2024-01-01", 1, 1, &[1]);
    assert_eq!(rank_order(&wide, &narrow), Ordering::Less);

    let early = window("2024-01-01", 8, 8, &[1]);
    let late = window("2024-01-02", 1, 1, &[1]);
    assert_eq!(rank_order(&early, &late), Ordering::Less);

    let first = window("2024-01-01", 1, 1, &[1]);
    let second = window("2024-01-01", 2, 2, &[1]);
    assert_eq!(rank_order(&first, &second), Ordering::Less);
    assert_eq!(rank_order(&first, &first), Ordering::Equal);
}

#[test]
fn select_top_n_skips_nested_windows() {
    let windows = vec![
        window("d", 9, 9, &[1, 2, 3]),
        window("d", 9, 11, &[1, 2, 3]),
        window("d", 10, 10, &[1, 2, 3]),
        window("d", 13, 13, &[1]),
    ];

    let best = select_top_n(windows, 3);

    assert_eq!(spans(&best), vec![(9, 11, 3), (13, 13, 1)]);
}

#[test]
fn select_top_n_stops_at_n() {
    let windows: Vec<SlotWindow> = (0..10).map(|s| window("d", s * 2, s * 2, &[1])).collect();
    let best = select_top_n(windows, 4);
    assert_eq!(best.len(), 4);
    assert_eq!(best[3].start, 6);
}

#[test]
fn select_top_n_sorts_unordered_input() {
    let windows = vec![
        window("2024-01-02", 1, 1, &[1]),
        window("2024-01-01", 5, 5, &[1, 2]),
        window("2024-01-01", 1, 1, &[1]),
    ];

    let best = select_top_n(windows, 3);

    let order: Vec<(&str, i32)> = best.iter().map(|w| (w.date.as_str(), w.start)).collect();
    assert_eq!(
        order,
        vec![("2024-01-01", 5), ("2024-01-01", 1), ("2024-01-02", 1)]
    );
}

#[test]
fn select_top_n_keeps_same_range_on_other_dates() {
    let windows = vec![
        window("2024-01-01", 9, 10, &[1, 2]),
        window("2024-01-02", 9, 10, &[1, 2]),
        window("2024-01-01", 10, 11, &[1, 2]),
    ];

    let best = select_top_n(windows, 3);

    let order: Vec<(&str, i32, i32)> = best
        .iter()
        .map(|w| (w.date.as_str(), w.start, w.end))
        .collect();
    assert_eq!(order, vec![("2024-01-01", 9, 10), ("2024-01-02", 9, 10)]);
}
