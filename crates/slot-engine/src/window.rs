//! Structured weekly availability windows.
//!
//! Staff availability is owned by clinic administration as one recurring
//! window per weekday, serialized as `"<Weekday> <start>-<end>"` (e.g.
//! `"Monday 09:00-17:00"`, clock in 24-hour or 12-hour form). The structured
//! record is the working representation; the string form is parsed once at
//! the import boundary (`FromStr`) and re-emitted for display (`Display`).

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::clock::parse_clock_time;
use crate::error::ScheduleError;

/// A recurring weekly interval during which a staff member can be booked.
///
/// Invariant: `start_minute < end_minute`, both within a single day.
/// Read-only to the scheduling engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub weekday: Weekday,
    /// Window start, minutes since midnight local time.
    pub start_minute: u32,
    /// Window end (exclusive), minutes since midnight local time.
    pub end_minute: u32,
}

impl AvailabilityWindow {
    /// Total length of the window in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }
}

impl FromStr for AvailabilityWindow {
    type Err = ScheduleError;

    /// Parse the string form: a weekday name, whitespace, then
    /// `"<start>-<end>"` with each endpoint in either clock format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (day_token, range) = trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(|| ScheduleError::InvalidWindow(trimmed.to_string()))?;

        let weekday: Weekday = day_token
            .parse()
            .map_err(|_| ScheduleError::InvalidWeekday(day_token.to_string()))?;

        let range = range.trim();
        let (start_text, end_text) = range
            .split_once('-')
            .ok_or_else(|| ScheduleError::InvalidWindow(range.to_string()))?;

        let start_minute = parse_clock_time(start_text)
            .ok_or_else(|| ScheduleError::InvalidClock(start_text.trim().to_string()))?;
        let end_minute = parse_clock_time(end_text)
            .ok_or_else(|| ScheduleError::InvalidClock(end_text.trim().to_string()))?;

        if start_minute >= end_minute {
            return Err(ScheduleError::InvalidWindow(format!(
                "start {} is not before end {}",
                start_text.trim(),
                end_text.trim()
            )));
        }

        Ok(Self {
            weekday,
            start_minute,
            end_minute,
        })
    }
}

impl fmt::Display for AvailabilityWindow {
    /// Canonical 24-hour string form, e.g. `"Monday 09:00-17:00"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}-{:02}:{:02}",
            weekday_name(self.weekday),
            self.start_minute / 60,
            self.start_minute % 60,
            self.end_minute / 60,
            self.end_minute % 60,
        )
    }
}

/// Full English name for a weekday, as used by the availability string form.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
