//! Bookable-slot computation from weekly availability.
//!
//! Given a staff member's declared weekly windows, a target date, an
//! appointment duration, and the appointments already booked that day,
//! produces the ordered list of start times the booking form may offer.
//! Malformed configuration and days without a window produce the same valid
//! outcome as a fully booked day: no availability. This path sits directly
//! behind a booking UI and must never turn a bad record into a crash.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::booking::BookedInterval;
use crate::clock::{format_minutes, MINUTES_PER_DAY};
use crate::window::AvailabilityWindow;

/// Fixed walk increment between candidate start times.
pub const SLOT_STRIDE_MINUTES: u32 = 30;

/// A bookable appointment start time within an availability window.
///
/// Produced fresh on every query; has no identity beyond its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateSlot {
    /// Slot start, minutes since midnight local time.
    pub start_minute: u32,
}

impl fmt::Display for CandidateSlot {
    /// 12-hour display form, e.g. `"9:00 AM"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.start_minute))
    }
}

/// Compute bookable start times from structured availability windows.
///
/// The first window matching the target date's weekday is walked in
/// [`SLOT_STRIDE_MINUTES`] increments from its start. A candidate
/// `[t, t + duration)` survives only if it fits entirely inside the window
/// (no overhang past the window end) and overlaps none of the existing
/// bookings; a single conflict excludes the slot. Results are ascending by
/// construction.
///
/// A zero duration, a weekday with no window, or a window shorter than the
/// duration all yield an empty list.
pub fn compute_available_slots(
    windows: &[AvailabilityWindow],
    target: NaiveDate,
    duration_minutes: u32,
    booked: &[BookedInterval],
) -> Vec<CandidateSlot> {
    if !plausible_duration(duration_minutes) {
        return Vec::new();
    }

    let weekday = target.weekday();
    match windows.iter().find(|w| w.weekday == weekday) {
        Some(window) => walk_window(window, duration_minutes, booked),
        None => Vec::new(),
    }
}

/// Compute bookable start times from availability strings as stored on the
/// staff record (`"<Weekday> <start>-<end>"`).
///
/// Selects the first string whose leading token names the target date's
/// weekday, then parses and walks it. A missing entry or a malformed one
/// yields an empty list: configuration problems read as "no availability",
/// never as an error.
pub fn available_slots<S: AsRef<str>>(
    availability: &[S],
    target: NaiveDate,
    duration_minutes: u32,
    booked: &[BookedInterval],
) -> Vec<CandidateSlot> {
    if !plausible_duration(duration_minutes) {
        return Vec::new();
    }

    let weekday = target.weekday();
    let entry = availability
        .iter()
        .map(AsRef::as_ref)
        .find(|s| leading_weekday(s) == Some(weekday));

    match entry {
        Some(entry) => match entry.parse::<AvailabilityWindow>() {
            Ok(window) => walk_window(&window, duration_minutes, booked),
            Err(_) => Vec::new(),
        },
        None => Vec::new(),
    }
}

/// Display labels for the computed slots, ascending: the form the booking
/// UI consumes directly (e.g. `["9:00 AM", "9:30 AM", ...]`).
pub fn available_slot_labels<S: AsRef<str>>(
    availability: &[S],
    target: NaiveDate,
    duration_minutes: u32,
    booked: &[BookedInterval],
) -> Vec<String> {
    available_slots(availability, target, duration_minutes, booked)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// No appointment is zero-length or longer than a day. The bound also keeps
/// the walk's minute arithmetic within `u32`.
fn plausible_duration(duration_minutes: u32) -> bool {
    duration_minutes > 0 && duration_minutes <= MINUTES_PER_DAY
}

/// The weekday named by an availability string's leading token, if any.
fn leading_weekday(entry: &str) -> Option<Weekday> {
    entry
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
}

/// Walk a window in fixed increments, keeping candidates that fit and are
/// unbooked. `duration_minutes` must be positive.
fn walk_window(
    window: &AvailabilityWindow,
    duration_minutes: u32,
    booked: &[BookedInterval],
) -> Vec<CandidateSlot> {
    let mut slots = Vec::new();
    let mut start = window.start_minute;
    while start + duration_minutes <= window.end_minute {
        let end = start + duration_minutes;
        if !booked.iter().any(|b| b.overlaps(start, end)) {
            slots.push(CandidateSlot {
                start_minute: start,
            });
        }
        start += SLOT_STRIDE_MINUTES;
    }
    slots
}
