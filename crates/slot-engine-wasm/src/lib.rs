//! WASM bindings for slot-engine.
//!
//! Exposes slot computation and date normalization to the JavaScript
//! booking UI via `wasm-bindgen`. Composite values cross the boundary as
//! JSON strings; scalar results cross natively.
//!
//! An empty slot list or a `null` date is a normal result the form renders
//! ("no available times", "invalid date — please re-enter"); `Err` is
//! reserved for malformed binding arguments (bad JSON, bad ISO date).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::Deserialize;
use slot_engine::BookedInterval;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for existing appointments passed from JavaScript.
#[derive(Deserialize)]
struct BookingInput {
    /// Stored appointment time, `"2:30 PM"` or `"14:30"`.
    time: String,
    /// Appointment length in minutes; the standard length when absent.
    duration_minutes: Option<u32>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO calendar date ("YYYY-MM-DD") from a binding argument.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

/// Convert a JSON array of `{time, duration_minutes?}` objects into booked
/// intervals. A booking whose stored time string does not parse is dropped.
fn parse_bookings_json(json: &str) -> Result<Vec<BookedInterval>, JsValue> {
    let inputs: Vec<BookingInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))?;

    Ok(inputs
        .iter()
        .filter_map(|b| BookedInterval::from_parts(&b.time, b.duration_minutes))
        .collect())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute bookable start times for a staff member on a given date.
///
/// Returns a JSON array of 12-hour time labels (e.g. `["9:00 AM","9:30 AM"]`),
/// ascending. An empty array is a normal outcome (no window that day, fully
/// booked, or malformed availability), not an error.
///
/// # Arguments
/// - `availability_json` -- JSON array of weekly availability strings
///   (e.g. `["Monday 09:00-17:00", "Tuesday 10:00-14:00"]`)
/// - `target_date` -- ISO calendar date, "YYYY-MM-DD"
/// - `duration_minutes` -- Requested appointment length in minutes
/// - `bookings_json` -- JSON array of `{time, duration_minutes?}` objects
///   for the appointments already booked that day
#[wasm_bindgen(js_name = "availableSlots")]
pub fn available_slots(
    availability_json: &str,
    target_date: &str,
    duration_minutes: u32,
    bookings_json: &str,
) -> Result<String, JsValue> {
    let availability: Vec<String> = serde_json::from_str(availability_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid availability JSON: {}", e)))?;
    let target = parse_date(target_date)?;
    let booked = parse_bookings_json(bookings_json)?;

    let labels =
        slot_engine::available_slot_labels(&availability, target, duration_minutes, &booked);

    serde_json::to_string(&labels)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Normalize free-form user date text to "YYYY-MM-DD".
///
/// `today` is an ISO calendar date supplying the default year for shapes
/// like "3/15"; the caller passes it so results stay deterministic. Returns
/// `null` for text that does not resolve to a real calendar date.
#[wasm_bindgen(js_name = "parseUserDate")]
pub fn parse_user_date(input: &str, today: &str) -> Result<Option<String>, JsValue> {
    let reference = parse_date(today)?;
    Ok(slot_engine::parse_user_date(input, reference).map(|d| d.format("%Y-%m-%d").to_string()))
}

/// Parse a clock string ("14:30" or "2:30 PM") into minutes since midnight.
/// Returns `undefined` for strings that do not parse.
#[wasm_bindgen(js_name = "parseClockTime")]
pub fn parse_clock_time(text: &str) -> Option<u32> {
    slot_engine::parse_clock_time(text)
}

/// Format minutes since midnight as a 12-hour label, e.g. 870 → "2:30 PM".
#[wasm_bindgen(js_name = "formatMinutes")]
pub fn format_minutes(minute: u32) -> String {
    slot_engine::format_minutes(minute)
}
