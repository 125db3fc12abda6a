//! Human-readable rendering of windows and dates.

use chrono::NaiveDate;

use crate::error::Result;
use crate::summary::BestWindow;
use crate::timeslot::TimeSlot;

/// `"HH:mm ~ HH:mm"` covering a TIME window, from the start of its first slot
/// to the end of its last. Whole-day windows have no time range.
///
/// ```
/// use gather_engine::format::window_time_range;
/// use gather_engine::BestWindow;
///
/// let window = BestWindow {
///     date: "2024-02-15".to_string(),
///     start_slot_index: 9,
///     end_slot_index: 11,
///     count: 2,
///     percentage: "100%".to_string(),
///     participants: vec![1, 2],
/// };
/// assert_eq!(window_time_range(&window, 60).unwrap().as_deref(), Some("09:00 ~ 12:00"));
/// ```
pub fn window_time_range(window: &BestWindow, interval_minutes: i32) -> Result<Option<String>> {
    if window.is_all_day() {
        return Ok(None);
    }
    let start = TimeSlot::from_index(window.start_slot_index, interval_minutes)?;
    let end = TimeSlot::from_index(window.end_slot_index, interval_minutes)?;
    Ok(Some(format!(
        "{} ~ {}",
        start.to_time_string(),
        end.to_end_time_string()
    )))
}

/// `"2025-12-09"` → `"2025-12-09 (Tue)"`. Unparsable dates come back unchanged.
pub fn date_with_weekday(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!("{} ({})", date, parsed.format("%a")),
        Err(_) => date.to_string(),
    }
}
