use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

use crate::values::{BookingDay, VenueKey};

/// Which day/court/slot combination is being checked or booked
///
/// Immutable once built; the same descriptor is used for the
/// feasibility check and every submission attempt of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneDescriptor {
    day: BookingDay,
    fields: BTreeMap<VenueKey, Vec<u32>>,
}

impl SceneDescriptor {
    /// Descriptor for a single court/slot pair
    pub fn single(day: BookingDay, venue: VenueKey, slot_id: u32) -> Self {
        SceneDescriptor {
            day,
            fields: BTreeMap::from([(venue, vec![slot_id])]),
        }
    }

    /// Add another slot, keeping slot ids per court sorted and unique
    pub fn with_slot(mut self, venue: VenueKey, slot_id: u32) -> Self {
        let slots = self.fields.entry(venue).or_default();
        if let Err(pos) = slots.binary_search(&slot_id) {
            slots.insert(pos, slot_id);
        }
        self
    }

    pub fn day(&self) -> BookingDay {
        self.day
    }

    pub fn fields(&self) -> &BTreeMap<VenueKey, Vec<u32>> {
        &self.fields
    }

    /// Wire encoding: `[{"day":"YYYY-MM-DD","fields":{"<key>":[<slot>,...]}}]`
    pub fn to_wire(&self) -> String {
        let fields: Map<String, Value> = self
            .fields
            .iter()
            .map(|(venue, slots)| (venue.to_string(), json!(slots)))
            .collect();

        json!([{
            "day": self.day.format("%Y-%m-%d").to_string(),
            "fields": fields,
        }])
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::parse_day;

    #[test]
    fn test_single_wire_format() {
        let scene = SceneDescriptor::single(parse_day("2024-05-01").unwrap(), "A1".into(), 3);
        assert_eq!(scene.to_wire(), r#"[{"day":"2024-05-01","fields":{"A1":[3]}}]"#);
    }

    #[test]
    fn test_with_slot_merges() {
        let scene = SceneDescriptor::single(parse_day("2024-05-01").unwrap(), "A1".into(), 5)
            .with_slot("A1".into(), 3)
            .with_slot("A1".into(), 5)
            .with_slot("B2".into(), 1);

        assert_eq!(scene.fields()[&VenueKey::from("A1")], vec![3, 5]);
        assert_eq!(
            scene.to_wire(),
            r#"[{"day":"2024-05-01","fields":{"A1":[3,5],"B2":[1]}}]"#
        );
    }
}
