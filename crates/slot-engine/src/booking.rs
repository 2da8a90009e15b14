//! Booked intervals -- the time ranges occupied by existing appointments.
//!
//! Derived per scheduling request from the stored appointment records for
//! the target date; never persisted by this crate.

use serde::{Deserialize, Serialize};

use crate::clock::parse_clock_time;

/// Standard appointment length, applied when a stored record carries no
/// explicit duration.
pub const DEFAULT_APPOINTMENT_MINUTES: u32 = 30;

/// The time range occupied by an existing, non-cancelled appointment on the
/// target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedInterval {
    /// Appointment start, minutes since midnight local time.
    pub start_minute: u32,
    /// Appointment length in minutes. Always positive.
    pub duration_minutes: u32,
}

impl BookedInterval {
    /// Build a booking from a stored appointment time string (`"2:30 PM"` or
    /// `"14:30"`) and its optional duration. A missing or zero duration
    /// falls back to [`DEFAULT_APPOINTMENT_MINUTES`]. Returns `None` when
    /// the time string does not parse.
    pub fn from_parts(time: &str, duration_minutes: Option<u32>) -> Option<Self> {
        let start_minute = parse_clock_time(time)?;
        Some(Self {
            start_minute,
            duration_minutes: duration_minutes
                .filter(|&d| d > 0)
                .unwrap_or(DEFAULT_APPOINTMENT_MINUTES),
        })
    }

    /// Exclusive end of the booking, minutes since midnight. Saturates
    /// rather than overflowing on degenerate inputs.
    pub fn end_minute(&self) -> u32 {
        self.start_minute.saturating_add(self.duration_minutes)
    }

    /// Whether the candidate range `[start_minute, end_minute)` overlaps
    /// this booking. Adjacent ranges, where one ends exactly when the other
    /// starts, do not overlap.
    pub fn overlaps(&self, start_minute: u32, end_minute: u32) -> bool {
        start_minute < self.end_minute() && end_minute > self.start_minute
    }
}
