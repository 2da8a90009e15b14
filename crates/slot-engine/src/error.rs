//! Error types for schedule boundary parsing.
//!
//! Only the structured import path (`AvailabilityWindow::from_str`) produces
//! these; the slot engine and date parser themselves report failure as an
//! empty list or `None`, never as an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid clock time: {0}")]
    InvalidClock(String),

    #[error("Invalid availability window: {0}")]
    InvalidWindow(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
