//! Free-text date normalization for user-entered form fields.
//!
//! Accepts the handful of numeric shapes people actually type into a date
//! box (`"2024-03-15"`, `"03/15/2024"`, `"3/15"`, `"15/03/2024"`) and
//! resolves them to a calendar date under a fixed disambiguation policy, or
//! reports failure. Sits behind a free-text input, so it never panics;
//! anything it does not recognize is `None`.
//!
//! # Disambiguation policy
//!
//! Short numeric dates are ambiguous (`"03/04"`: March 4th or April 3rd?).
//! The policy is month-first (US-style), falling back to day-first only
//! when the month-first reading is calendrically impossible. The precedence
//! is deliberate and pinned by tests on both branches; changing it silently
//! re-reads existing user input.

use chrono::{Datelike, NaiveDate};

/// Parse loosely-formatted user date text into a calendar date.
///
/// Attempts in order, first match wins:
///
/// 1. `YYYY-M-D` / `YYYY/M/D` — year-first, 4-digit year, 1–2 digit month
///    and day. An impossible calendar date (Feb 30) is a failure, not a
///    silently corrected date.
/// 2. `M-D[-YYYY]` / `M/D[/YYYY]` — month-first, then the day-first swap
///    when the first component cannot be read as a month for that date.
///    The year defaults to `today`'s year when omitted.
///
/// Anything else is `None`. `today` exists only for the year default; the
/// caller supplies it so the function stays deterministic under test.
pub fn parse_user_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let trimmed = input.trim();
    let parts = split_numeric_parts(trimmed)?;

    match parts.as_slice() {
        [year, month, day] if year.len() == 4 => {
            if month.len() > 2 || day.len() > 2 {
                return None;
            }
            NaiveDate::from_ymd_opt(
                parse_component(year)? as i32,
                parse_component(month)?,
                parse_component(day)?,
            )
        }
        [first, second, year] if first.len() <= 2 && second.len() <= 2 && year.len() == 4 => {
            resolve_month_day(
                parse_component(first)?,
                parse_component(second)?,
                parse_component(year)? as i32,
            )
        }
        [first, second] if first.len() <= 2 && second.len() <= 2 => {
            resolve_month_day(parse_component(first)?, parse_component(second)?, today.year())
        }
        _ => None,
    }
}

/// Split on `-` or `/` into all-digit components. `None` unless there are
/// exactly two or three non-empty numeric components.
fn split_numeric_parts(text: &str) -> Option<Vec<&str>> {
    if text.is_empty() {
        return None;
    }
    let parts: Vec<&str> = text.split(['-', '/']).collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    Some(parts)
}

fn parse_component(text: &str) -> Option<u32> {
    text.parse().ok()
}

/// Apply the month-first policy: read `(first, second)` as month/day, and
/// swap to day/month only when that reading is not a real date.
fn resolve_month_day(first: u32, second: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, first, second)
        .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
}
