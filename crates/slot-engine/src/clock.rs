//! Clock-string ↔ minutes-since-midnight conversion.
//!
//! Appointment times arrive in two shapes depending on where the record was
//! written: 24-hour `"14:30"` (availability configuration) and 12-hour
//! `"2:30 PM"` (stored appointment times). One parser accepts both, and both
//! the window parser and the booking parser go through it, so the two call
//! sites cannot disagree about what a given clock string means.

/// Minutes in a day. Upper bound for any minutes-since-midnight value.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a clock string into minutes since midnight.
///
/// Accepts 24-hour `"HH:MM"` (e.g. `"14:30"`) and 12-hour `"H:MM AM"` /
/// `"H:MM PM"` (e.g. `"2:30 PM"`, meridiem case-insensitive). Minutes must
/// be exactly two digits. Returns `None` for anything else, including
/// out-of-range components.
///
/// 12-hour conversion: hour 12 with AM is midnight (0), hour 12 with PM is
/// noon (720), any other PM hour gains 12.
pub fn parse_clock_time(text: &str) -> Option<u32> {
    let trimmed = text.trim();

    // Split off a trailing meridiem, if present. `is_pm` is None for the
    // 24-hour form.
    let (clock, is_pm) = match trimmed.rsplit_once(' ') {
        Some((clock, tail)) if tail.eq_ignore_ascii_case("AM") => (clock.trim_end(), Some(false)),
        Some((clock, tail)) if tail.eq_ignore_ascii_case("PM") => (clock.trim_end(), Some(true)),
        _ => (trimmed, None),
    };

    let (hour_text, minute_text) = clock.split_once(':')?;
    if hour_text.is_empty() || hour_text.len() > 2 || minute_text.len() != 2 {
        return None;
    }
    if !is_all_digits(hour_text) || !is_all_digits(minute_text) {
        return None;
    }

    let hour: u32 = hour_text.parse().ok()?;
    let minute: u32 = minute_text.parse().ok()?;
    if minute >= 60 {
        return None;
    }

    let hour = match is_pm {
        Some(pm) => {
            if hour == 0 || hour > 12 {
                return None;
            }
            match (hour, pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, false) => h,
                (h, true) => h + 12,
            }
        }
        None => {
            if hour >= 24 {
                return None;
            }
            hour
        }
    };

    Some(hour * 60 + minute)
}

/// Format minutes since midnight as a 12-hour display string, `"H:MM AM/PM"`.
///
/// No leading zero on the hour, zero-padded minutes: 0 → `"12:00 AM"`,
/// 720 → `"12:00 PM"`, 990 → `"4:30 PM"`. Values are taken modulo a day.
/// The exact inverse of [`parse_clock_time`] over `0..MINUTES_PER_DAY`.
pub fn format_minutes(minute: u32) -> String {
    let minute = minute % MINUTES_PER_DAY;
    let hour24 = minute / 60;
    let min = minute % 60;
    let meridiem = if hour24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, min, meridiem)
}

fn is_all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}
