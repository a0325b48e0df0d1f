//! Operator choices to remote identifiers
//!
//! Pure lookups over already-fetched data; no retries, no I/O.

use courtside_core::{BookingDay, SceneDescriptor, TimeSlot, Venue, VenueKey};

use crate::error::ResolveError;

/// Venue key of the court displayed as `name`
///
/// Names are matched exactly. When several courts share a name the
/// lowest venue key wins, so the choice does not depend on input order.
pub fn resolve_venue_key<'a>(venues: &'a [Venue], name: &str) -> Result<&'a VenueKey, ResolveError> {
    venues
        .iter()
        .filter(|venue| venue.name == name)
        .map(|venue| &venue.key)
        .min()
        .ok_or_else(|| ResolveError::VenueNotFound(name.to_string()))
}

/// Id of the slot starting at `hour`:00
///
/// Only hour-aligned slots are reachable; a half-hour slot must be
/// entered by the hour it belongs to.
pub fn resolve_slot_id(slots: &[TimeSlot], hour: u32) -> Result<u32, ResolveError> {
    let target = format!("{:02}:00", hour);
    if hour > 23 {
        return Err(ResolveError::SlotNotFound(target));
    }

    slots
        .iter()
        .find(|slot| slot.begin_text == target)
        .map(|slot| slot.id)
        .ok_or(ResolveError::SlotNotFound(target))
}

/// A resolved court/slot pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSelection {
    pub venue_key: VenueKey,
    pub slot_id: u32,
}

impl SlotSelection {
    pub fn resolve(
        venues: &[Venue],
        slots: &[TimeSlot],
        venue_name: &str,
        hour: u32,
    ) -> Result<Self, ResolveError> {
        let venue_key = resolve_venue_key(venues, venue_name)?.clone();
        let slot_id = resolve_slot_id(slots, hour)?;
        Ok(SlotSelection { venue_key, slot_id })
    }

    /// Scene descriptor used for the feasibility check and every submission
    pub fn scene(&self, day: BookingDay) -> SceneDescriptor {
        SceneDescriptor::single(day, self.venue_key.clone(), self.slot_id)
    }
}
