//! Courtside Core Domain
//!
//! Pure domain types for the Courtside booking orchestrator.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    APPOINTMENT_ORDER_TYPE,
    BookedMap,
    Feasibility,
    OrderQuery,
    OrderRecord,
    OrderStatus,
    PriceInfo,
    PriceTable,
    SceneDescriptor,
    SubmitAck,
    TimeSlot,
    Venue,
};
pub use values::{BookingDay, VenueGroupId, VenueKey, iso_weekday, parse_day};
