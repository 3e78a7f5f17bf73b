//! WASM bindings for tutor-grid.
//!
//! Exposes booking subtraction, slot building, subject filtering and week
//! classification to a JavaScript renderer via `wasm-bindgen`. All complex
//! types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p tutor-grid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg \
//!   target/wasm32-unknown-unknown/release/tutor_grid_wasm.wasm
//! ```

use serde::{Deserialize, Serialize};
use tutor_grid::{
    build_slots, classify_week, minutes_to_text, parse_iso_date, subject_matches, subtract,
    text_to_minutes, Classification, GridConfig, Interval, Selection, Snapshot, Tutor, TutorId,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SlotDto {
    start: String,
    end: String,
}

impl From<&Interval> for SlotDto {
    fn from(i: &Interval) -> Self {
        Self {
            start: minutes_to_text(i.start),
            end: minutes_to_text(i.end),
        }
    }
}

#[derive(Serialize)]
struct DayDto {
    date: String,
    cells: Vec<Classification>,
}

#[derive(Serialize)]
struct WeekDto {
    week_start: String,
    slots: Vec<SlotDto>,
    days: Vec<DayDto>,
}

/// Selection as sent from JavaScript: `{ "tutor_ids": [...], "subject_query": "..." }`.
/// Ids may be strings or numbers.
#[derive(Deserialize)]
struct SelectionInput {
    #[serde(default)]
    tutor_ids: Vec<serde_json::Value>,
    #[serde(default)]
    subject_query: String,
}

impl SelectionInput {
    fn into_selection(self) -> Selection {
        let ids = self.tutor_ids.into_iter().map(|v| match v {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });
        Selection::new(ids.map(TutorId::new), self.subject_query)
    }
}

// ---------------------------------------------------------------------------
// Plain-Rust implementations (testable off-wasm)
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn parse_pairs(json: &str, what: &str) -> Result<Vec<Interval>, String> {
    let pairs: Vec<(i32, i32)> =
        serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))?;
    Ok(pairs.into_iter().map(Interval::from).collect())
}

fn subtract_impl(available_json: &str, busy_json: &str) -> Result<String, String> {
    let available = parse_pairs(available_json, "available")?;
    let busy = parse_pairs(busy_json, "busy")?;
    let free: Vec<(i32, i32)> = subtract(&available, &busy)
        .into_iter()
        .map(|i| (i.start, i.end))
        .collect();
    to_json(&free)
}

fn build_slots_impl(window_start: &str, window_end: &str, slot_minutes: i32) -> Result<String, String> {
    let start = text_to_minutes(window_start).map_err(|e| e.to_string())?;
    let end = text_to_minutes(window_end).map_err(|e| e.to_string())?;
    let slots: Vec<SlotDto> = build_slots(start, end, slot_minutes).iter().map(SlotDto::from).collect();
    to_json(&slots)
}

fn filter_tutors_impl(tutors_json: &str, query: &str) -> Result<String, String> {
    let tutors: Vec<Tutor> =
        serde_json::from_str(tutors_json).map_err(|e| format!("Invalid tutors JSON: {}", e))?;
    let ids: Vec<&str> = tutors
        .iter()
        .filter(|t| subject_matches(&t.subjects, query))
        .map(|t| t.id.as_str())
        .collect();
    to_json(&ids)
}

fn classify_week_impl(
    tutors_json: &str,
    events_json: &str,
    selection_json: &str,
    week_start: &str,
    config_json: Option<&str>,
) -> Result<String, String> {
    let snapshot = Snapshot::from_json(tutors_json, events_json, "[]").map_err(|e| e.to_string())?;
    let selection: SelectionInput =
        serde_json::from_str(selection_json).map_err(|e| format!("Invalid selection JSON: {}", e))?;
    let config = match config_json {
        Some(json) => GridConfig::from_json(json).map_err(|e| e.to_string())?,
        None => GridConfig::default(),
    };
    let window = config.window().map_err(|e| e.to_string())?;
    let week_start = parse_iso_date(week_start).map_err(|e| e.to_string())?;

    let grid = classify_week(&snapshot, &selection.into_selection(), week_start, &window);

    let dto = WeekDto {
        week_start: grid.week_start,
        slots: grid.slots.iter().map(SlotDto::from).collect(),
        days: grid
            .days
            .into_iter()
            .map(|d| DayDto {
                date: d.date,
                cells: d.cells,
            })
            .collect(),
    };
    to_json(&dto)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Subtract busy intervals from available intervals.
///
/// Both arguments are JSON arrays of `[start, end]` minute pairs. Returns a
/// JSON array of the remaining free `[start, end]` pairs (unsorted, unmerged).
#[wasm_bindgen(js_name = "subtractIntervals")]
pub fn subtract_intervals(available_json: &str, busy_json: &str) -> Result<String, JsValue> {
    subtract_impl(available_json, busy_json).map_err(|e| JsValue::from_str(&e))
}

/// Build the slot list for a display window.
///
/// Returns a JSON array of `{start, end}` objects with `"HH:MM"` strings.
#[wasm_bindgen(js_name = "buildSlots")]
pub fn build_slots_js(window_start: &str, window_end: &str, slot_minutes: i32) -> Result<String, JsValue> {
    build_slots_impl(window_start, window_end, slot_minutes).map_err(|e| JsValue::from_str(&e))
}

/// Ids of the tutors whose subjects contain `query` (case-insensitive).
#[wasm_bindgen(js_name = "filterTutors")]
pub fn filter_tutors(tutors_json: &str, query: &str) -> Result<String, JsValue> {
    filter_tutors_impl(tutors_json, query).map_err(|e| JsValue::from_str(&e))
}

/// Classify every slot of the week starting at `week_start`.
///
/// - `tutors_json` -- array of `{id, name, color, subjects, availability}`
/// - `events_json` -- array of `{tutor_id, date, start, end}`
/// - `selection_json` -- `{tutor_ids, subject_query}`
/// - `week_start` -- `"YYYY-MM-DD"`, used as the first column
/// - `config_json` -- optional `{window_start, window_end, slot_minutes}`
///
/// Returns `{week_start, slots: [{start, end}], days: [{date, cells}]}` with
/// each cell one of `"free"`, `"busy"`, `"partial"`.
#[wasm_bindgen(js_name = "classifyWeek")]
pub fn classify_week_js(
    tutors_json: &str,
    events_json: &str,
    selection_json: &str,
    week_start: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    classify_week_impl(
        tutors_json,
        events_json,
        selection_json,
        week_start,
        config_json.as_deref(),
    )
    .map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtract_pairs() {
        assert_eq!(subtract_impl("[[0,60]]", "[[20,40]]").unwrap(), "[[0,20],[40,60]]");
        assert_eq!(subtract_impl("[[0,60]]", "[[-10,70]]").unwrap(), "[]");
        assert!(subtract_impl("[0,60]", "[]").is_err());
    }

    #[test]
    fn slots_as_text() {
        let json = build_slots_impl("08:00", "09:00", 30).unwrap();
        assert_eq!(
            json,
            r#"[{"start":"08:00","end":"08:30"},{"start":"08:30","end":"09:00"}]"#
        );
    }

    #[test]
    fn oversized_slot_width_gives_empty_list() {
        assert_eq!(build_slots_impl("08:00", "20:00", i32::MAX).unwrap(), "[]");
        let json = classify_week_impl("[]", "[]", "{}", "2026-03-16", Some(r#"{"slot_minutes":2147483647}"#)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["slots"], serde_json::json!([]));
    }

    #[test]
    fn filter_by_subject() {
        let tutors = r#"[{"id":"a","subjects":"Math, Physics"},{"id":2,"subjects":"Chemistry"}]"#;
        assert_eq!(filter_tutors_impl(tutors, "phys").unwrap(), r#"["a"]"#);
        assert_eq!(filter_tutors_impl(tutors, "").unwrap(), r#"["a","2"]"#);
    }

    #[test]
    fn classify_monday_morning() {
        let tutors = r#"[{"id":"t1","availability":{"mon":["08:00-12:00"]}}]"#;
        let events = r#"[{"tutor_id":"t1","date":"2026-03-16","start":"09:00","end":"10:00"}]"#;
        let config = r#"{"window_end":"12:00"}"#;

        let json = classify_week_impl(tutors, events, r#"{"tutor_ids":["t1"]}"#, "2026-03-16", Some(config)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["slots"].as_array().unwrap().len(), 8);
        assert_eq!(
            value["days"][0]["cells"],
            serde_json::json!(["free", "free", "busy", "busy", "free", "free", "free", "free"])
        );
        assert_eq!(value["days"][1]["cells"][0], "partial");
    }

    #[test]
    fn classify_rejects_bad_input() {
        assert!(classify_week_impl("[]", "[]", "{}", "not-a-date", None).is_err());
        assert!(classify_week_impl("{", "[]", "{}", "2026-03-16", None).is_err());
    }

    #[test]
    fn numeric_selection_ids() {
        let tutors = r#"[{"id":7,"availability":{"mon":["08:00-09:00"]}}]"#;
        let json = classify_week_impl(tutors, "[]", r#"{"tutor_ids":[7]}"#, "2026-03-16", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["days"][0]["cells"][0], "free");
    }
}
