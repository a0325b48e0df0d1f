use std::collections::HashMap;

use crate::values::{BookingDay, VenueKey};

/// Occupancy snapshot for one calendar day
///
/// Keys are "venueKey-slotId"; 0 means free, anything else is taken.
/// The snapshot may already be stale when a submission is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedMap {
    day: BookingDay,
    entries: HashMap<String, i64>,
}

impl BookedMap {
    pub fn new(day: BookingDay, entries: HashMap<String, i64>) -> Self {
        BookedMap { day, entries }
    }

    /// Composite key the remote service uses for a court/slot pair
    pub fn booking_key(venue: &VenueKey, slot_id: u32) -> String {
        format!("{}-{}", venue, slot_id)
    }

    pub fn day(&self) -> BookingDay {
        self.day
    }

    /// Raw occupancy flag; absent keys count as free
    pub fn occupancy(&self, venue: &VenueKey, slot_id: u32) -> i64 {
        self.entries
            .get(&Self::booking_key(venue, slot_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_free(&self, venue: &VenueKey, slot_id: u32) -> bool {
        self.occupancy(venue, slot_id) == 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::parse_day;

    #[test]
    fn test_occupancy_lookup() {
        let entries = HashMap::from([("A1-1".to_string(), 0), ("A2-1".to_string(), 1)]);
        let booked = BookedMap::new(parse_day("2024-05-01").unwrap(), entries);

        assert!(booked.is_free(&VenueKey::from("A1"), 1));
        assert!(!booked.is_free(&VenueKey::from("A2"), 1));
        // Absent keys are free
        assert!(booked.is_free(&VenueKey::from("A3"), 1));
        assert_eq!(booked.occupancy(&VenueKey::from("A2"), 1), 1);
        assert_eq!(booked.len(), 2);
    }

    #[test]
    fn test_booking_key() {
        assert_eq!(BookedMap::booking_key(&VenueKey::from("B3"), 12), "B3-12");
    }
}
