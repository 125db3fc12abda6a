//! WASM bindings for gather-engine.
//!
//! Exposes the TIME and ALL_DAY summaries, the request-document entry point,
//! and slot conversion to JavaScript via `wasm-bindgen`. All complex types are
//! passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p gather-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/gather-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/gather_wasm.wasm
//! ```

use gather_engine::request::SelectionEntry;
use gather_engine::{ParticipantSelection, SummaryOptions, SummaryRequest, SummaryResult, TimeSlot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON across the boundary
// ---------------------------------------------------------------------------

/// Parse a JSON array of `{user_id, interval_minutes?, selections}` objects.
///
/// Entries without an interval take `interval_minutes`.
fn parse_selections_json(
    json: &str,
    interval_minutes: i32,
) -> Result<Vec<ParticipantSelection>, JsValue> {
    let entries: Vec<SelectionEntry> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid selections JSON: {}", e)))?;

    Ok(entries
        .iter()
        .map(|entry| entry.to_selection(interval_minutes))
        .collect())
}

fn options(top_n: Option<usize>) -> SummaryOptions {
    top_n.map_or_else(SummaryOptions::default, |top_n| SummaryOptions { top_n })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn to_js_error(e: gather_engine::GatherError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Shortlist the best contiguous time windows.
///
/// `selections_json` is a JSON array of selection objects. Returns the
/// `SummaryResult` as a JSON string.
///
/// # Arguments
/// - `interval_minutes` -- Slot width; must divide 1440
/// - `selections_json` -- `[{"user_id": 1, "selections": {"2024-02-15": [9, 10]}}, ...]`
/// - `total_participants` -- Number of distinct voters (percentage denominator)
/// - `top_n` -- Optional shortlist length (defaults to 3)
#[wasm_bindgen(js_name = "computeTimeSummary")]
pub fn compute_time_summary(
    interval_minutes: i32,
    selections_json: &str,
    total_participants: usize,
    top_n: Option<usize>,
) -> Result<String, JsValue> {
    let selections = parse_selections_json(selections_json, interval_minutes)?;
    let summary: SummaryResult = gather_engine::compute_time_summary(
        interval_minutes,
        &selections,
        total_participants,
        &options(top_n),
    )
    .map_err(to_js_error)?;
    to_json(&summary)
}

/// Shortlist the best whole days. Slot indices in the input are ignored.
#[wasm_bindgen(js_name = "computeAllDaySummary")]
pub fn compute_all_day_summary(
    selections_json: &str,
    total_participants: usize,
    top_n: Option<usize>,
) -> Result<String, JsValue> {
    let selections = parse_selections_json(selections_json, TimeSlot::DEFAULT_INTERVAL_MINUTES)?;
    let summary =
        gather_engine::compute_all_day_summary(&selections, total_participants, &options(top_n));
    to_json(&summary)
}

/// Evaluate a complete request document (see `gather_engine::request`).
#[wasm_bindgen(js_name = "summarizeRequest")]
pub fn summarize_request(request_json: &str) -> Result<String, JsValue> {
    let request = SummaryRequest::from_json(request_json).map_err(to_js_error)?;
    let summary = request.evaluate().map_err(to_js_error)?;
    to_json(&summary)
}

/// `HH:mm` start time of `index` under `interval_minutes`.
#[wasm_bindgen(js_name = "slotToTime")]
pub fn slot_to_time(index: i32, interval_minutes: i32) -> Result<String, JsValue> {
    TimeSlot::from_index(index, interval_minutes)
        .map(|slot| slot.to_time_string())
        .map_err(to_js_error)
}

/// Slot index of an `HH:mm` start time under `interval_minutes`.
#[wasm_bindgen(js_name = "timeToSlot")]
pub fn time_to_slot(time: &str, interval_minutes: i32) -> Result<i32, JsValue> {
    TimeSlot::from_time_string(time, interval_minutes)
        .map(|slot| slot.slot_index())
        .map_err(to_js_error)
}
