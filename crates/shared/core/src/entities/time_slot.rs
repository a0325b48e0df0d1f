use serde::{Deserialize, Serialize};
use std::fmt;

use crate::values::VenueGroupId;

/// Fixed clock interval during which a court can be booked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: u32,
    pub venue_group: VenueGroupId,
    /// Machine start time as reported by the remote service
    pub begin: i64,
    /// Machine end time as reported by the remote service
    pub end: i64,
    /// Display start time, "HH:MM"
    pub begin_text: String,
    /// Display end time, "HH:MM"
    pub end_text: String,
    /// Pricing bucket (weekday/weekend/...)
    pub day_type: String,
}

impl TimeSlot {
    /// Row label used by the availability matrix: "start-end"
    pub fn label(&self) -> String {
        format!("{}-{}", self.begin_text, self.end_text)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {} {} ({})", self.id, self.label(), self.day_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let slot = TimeSlot {
            id: 7,
            venue_group: VenueGroupId::new(25),
            begin: 32400,
            end: 36000,
            begin_text: "09:00".to_string(),
            end_text: "10:00".to_string(),
            day_type: "weekday".to_string(),
        };
        assert_eq!(slot.label(), "09:00-10:00");
        assert_eq!(slot.to_string(), "slot 7 09:00-10:00 (weekday)");
    }
}
