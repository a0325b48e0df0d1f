use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar day a booking targets
pub type BookingDay = NaiveDate;

/// Identifier of a venue group - the facility a run books into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueGroupId(u32);

impl VenueGroupId {
    pub fn new(id: u32) -> Self {
        VenueGroupId(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for VenueGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VenueGroupId {
    fn from(id: u32) -> Self {
        VenueGroupId(id)
    }
}

impl FromStr for VenueGroupId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(VenueGroupId)
    }
}

/// Stable key of a single court within its venue group
///
/// The remote service uses this key both in the booked map
/// ("key-slotId") and in scene descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueKey(String);

impl VenueKey {
    pub fn new(key: impl Into<String>) -> Self {
        VenueKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VenueKey {
    fn from(s: &str) -> Self {
        VenueKey::new(s)
    }
}

impl From<String> for VenueKey {
    fn from(s: String) -> Self {
        VenueKey(s)
    }
}

/// Parse a `YYYY-MM-DD` booking day
pub fn parse_day(input: &str) -> Result<BookingDay, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
}

/// Weekday number used by the price endpoint: Monday = 1 ... Sunday = 7
pub fn iso_weekday(day: BookingDay) -> u32 {
    day.weekday().number_from_monday()
}
