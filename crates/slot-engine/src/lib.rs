//! # slot-engine
//!
//! Appointment slot computation and date normalization for the clinic
//! booking flow.
//!
//! Two independent, pure components:
//!
//! - the slot availability engine — staff weekly availability windows +
//!   target date + duration + existing bookings → ordered bookable start
//!   times ([`available_slots`], [`compute_available_slots`]);
//! - the flexible date parser — free-form user text → normalized calendar
//!   date or an explicit failure ([`parse_user_date`]).
//!
//! Both are deterministic and side-effect-free, and neither panics on
//! malformed input: a bad availability string or an unreadable date is a
//! normal empty/`None` outcome, because these functions sit directly behind
//! form fields. All time arithmetic is in minutes since midnight, local time; no
//! timezone conversion is performed.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{available_slot_labels, BookedInterval};
//!
//! let availability = ["Monday 09:00-17:00".to_string()];
//! let monday = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
//! let booked = [BookedInterval::from_parts("9:00 AM", Some(30)).unwrap()];
//!
//! let labels = available_slot_labels(&availability, monday, 30, &booked);
//! assert_eq!(labels.first().map(String::as_str), Some("9:30 AM"));
//! ```
//!
//! ## Modules
//!
//! - [`schedule`] — slot walk over availability windows
//! - [`dateparse`] — free-text date normalization
//! - [`clock`] — clock-string ↔ minutes-since-midnight conversion
//! - [`window`] — structured weekly availability windows
//! - [`booking`] — booked intervals and the default appointment length
//! - [`error`] — boundary parse errors

pub mod booking;
pub mod clock;
pub mod dateparse;
pub mod error;
pub mod schedule;
pub mod window;

pub use booking::{BookedInterval, DEFAULT_APPOINTMENT_MINUTES};
pub use clock::{format_minutes, parse_clock_time};
pub use dateparse::parse_user_date;
pub use error::ScheduleError;
pub use schedule::{
    available_slot_labels, available_slots, compute_available_slots, CandidateSlot,
    SLOT_STRIDE_MINUTES,
};
pub use window::AvailabilityWindow;
