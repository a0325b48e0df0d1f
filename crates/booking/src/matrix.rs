//! Venue x time-slot availability grid

use courtside_core::{BookedMap, TimeSlot, Venue, VenueKey};
use std::collections::BTreeMap;
use std::fmt::Write;

const LABEL_WIDTH: usize = 15;
const CELL_WIDTH: usize = 8;

/// Column header of the matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixColumn {
    pub key: VenueKey,
    pub name: String,
}

/// Read-only availability view for one day
///
/// Rows are keyed by the "start-end" slot label, columns by venue key.
/// Both are sorted lexicographically so rendering is reproducible
/// whatever order the inputs arrived in.
///
/// Slots sharing a label (e.g. weekday and weekend variants of the same
/// hour) collapse into one row holding the last such slot's occupancy,
/// so the row count can be lower than the slot count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityMatrix {
    columns: Vec<MatrixColumn>,
    rows: BTreeMap<String, Vec<bool>>,
}

impl AvailabilityMatrix {
    /// A cell is free iff `booked["<venueKey>-<slotId>"]` is 0 or absent
    pub fn build(venues: &[Venue], slots: &[TimeSlot], booked: &BookedMap) -> Self {
        let mut columns: Vec<MatrixColumn> = venues
            .iter()
            .map(|venue| MatrixColumn {
                key: venue.key.clone(),
                name: venue.name.clone(),
            })
            .collect();
        columns.sort_by(|a, b| a.key.cmp(&b.key));
        columns.dedup_by(|a, b| a.key == b.key);

        let rows = slots
            .iter()
            .map(|slot| {
                let cells = columns
                    .iter()
                    .map(|column| booked.is_free(&column.key, slot.id))
                    .collect();
                (slot.label(), cells)
            })
            .collect();

        AvailabilityMatrix { columns, rows }
    }

    pub fn columns(&self) -> &[MatrixColumn] {
        &self.columns
    }

    /// Rows in label order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[bool])> {
        self.rows
            .iter()
            .map(|(label, cells)| (label.as_str(), cells.as_slice()))
    }

    /// `None` if either the slot label or the venue is unknown
    pub fn is_free(&self, label: &str, venue: &VenueKey) -> Option<bool> {
        let column = self.columns.iter().position(|c| &c.key == venue)?;
        self.rows.get(label).map(|cells| cells[column])
    }

    pub fn free_count(&self) -> usize {
        self.rows
            .values()
            .map(|cells| cells.iter().filter(|free| **free).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Fixed-width text table, venue display names as headers
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = write!(out, "{:<LABEL_WIDTH$}", "Time slot");
        for column in &self.columns {
            let _ = write!(out, "{:<CELL_WIDTH$}", column.name);
        }
        out.push('\n');

        for (label, cells) in self.rows() {
            let _ = write!(out, "{:<LABEL_WIDTH$}", label);
            for free in cells {
                let _ = write!(out, "{:<CELL_WIDTH$}", if *free { "free" } else { "taken" });
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::{VenueGroupId, parse_day};
    use std::collections::HashMap;

    fn slot(id: u32, begin: &str, end: &str) -> TimeSlot {
        TimeSlot {
            id,
            venue_group: VenueGroupId::new(25),
            begin: 0,
            end: 0,
            begin_text: begin.to_string(),
            end_text: end.to_string(),
            day_type: "weekday".to_string(),
        }
    }

    fn booked(entries: &[(&str, i64)]) -> BookedMap {
        BookedMap::new(
            parse_day("2024-05-01").unwrap(),
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_two_courts_one_slot() {
        let venues = vec![
            Venue::new("A1", 1, "Court1", 4),
            Venue::new("A2", 2, "Court2", 4),
        ];
        let slots = vec![slot(1, "09:00", "10:00")];
        let matrix = AvailabilityMatrix::build(&venues, &slots, &booked(&[("A1-1", 0), ("A2-1", 1)]));

        assert_eq!(matrix.is_free("09:00-10:00", &"A1".into()), Some(true));
        assert_eq!(matrix.is_free("09:00-10:00", &"A2".into()), Some(false));
        assert_eq!(matrix.is_free("10:00-11:00", &"A1".into()), None);
        assert_eq!(matrix.is_free("09:00-10:00", &"B9".into()), None);
        assert_eq!(matrix.free_count(), 1);
    }

    #[test]
    fn test_shared_label_keeps_last_slot() {
        let venues = vec![Venue::new("A1", 1, "Court1", 4)];
        let slots = vec![slot(1, "09:00", "10:00"), slot(7, "09:00", "10:00")];
        let matrix = AvailabilityMatrix::build(&venues, &slots, &booked(&[("A1-1", 1)]));

        assert_eq!(matrix.rows().count(), 1);
        assert_eq!(matrix.is_free("09:00-10:00", &"A1".into()), Some(true));
    }

    #[test]
    fn test_columns_sorted_regardless_of_input_order() {
        let forward = vec![
            Venue::new("A1", 1, "Court1", 4),
            Venue::new("A2", 2, "Court2", 4),
            Venue::new("B1", 3, "Court3", 4),
        ];
        let mut shuffled = forward.clone();
        shuffled.reverse();
        shuffled.swap(0, 1);

        let slots = vec![slot(1, "09:00", "10:00")];
        let map = booked(&[("A2-1", 2)]);

        let a = AvailabilityMatrix::build(&forward, &slots, &map);
        let b = AvailabilityMatrix::build(&shuffled, &slots, &map);

        let keys: Vec<_> = b.columns().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["A1", "A2", "B1"]);
        assert_eq!(a, b);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_rows_sorted_by_label() {
        let venues = vec![Venue::new("A1", 1, "Court1", 4)];
        let slots = vec![
            slot(3, "11:00", "12:00"),
            slot(1, "09:00", "10:00"),
            slot(2, "10:00", "11:00"),
        ];
        let matrix = AvailabilityMatrix::build(&venues, &slots, &booked(&[]));

        let labels: Vec<_> = matrix.rows().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["09:00-10:00", "10:00-11:00", "11:00-12:00"]);
        assert_eq!(matrix.free_count(), 3);
    }

    #[test]
    fn test_nonzero_flags_are_taken() {
        let venues = vec![Venue::new("A1", 1, "Court1", 4)];
        let slots = vec![slot(1, "09:00", "10:00"), slot(2, "10:00", "11:00")];
        let matrix = AvailabilityMatrix::build(&venues, &slots, &booked(&[("A1-1", -1), ("A1-2", 7)]));

        assert_eq!(matrix.free_count(), 0);
    }

    #[test]
    fn test_render() {
        let venues = vec![
            Venue::new("A2", 2, "Court2", 4),
            Venue::new("A1", 1, "Court1", 4),
        ];
        let slots = vec![slot(1, "09:00", "10:00")];
        let matrix = AvailabilityMatrix::build(&venues, &slots, &booked(&[("A1-1", 0), ("A2-1", 1)]));

        assert_eq!(
            matrix.render(),
            "Time slot      Court1  Court2  \n\
             09:00-10:00    free    taken   \n"
        );
    }

    #[test]
    fn test_empty_inputs() {
        let matrix = AvailabilityMatrix::build(&[], &[], &booked(&[]));
        assert!(matrix.is_empty());
        assert_eq!(matrix.render(), "Time slot      \n");
    }
}
