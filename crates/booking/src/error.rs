//! Booking errors

use chrono::NaiveTime;
use thiserror::Error;

/// Operator input that matches nothing in the fetched data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No venue named {0:?}")]
    VenueNotFound(String),

    #[error("No time slot starting at {0}")]
    SlotNotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Booking window start {start} must be before end {end}")]
    Inverted { start: NaiveTime, end: NaiveTime },

    #[error("Invalid time of day {0:?}, expected HH:MM:SS")]
    InvalidTime(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("Cancelled while waiting for the booking window")]
    Cancelled,
}
