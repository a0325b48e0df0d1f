//! Courtside Ports
//!
//! Port definitions (traits) for the Courtside booking orchestrator.
//! These define the boundaries between the booking core and infrastructure.

mod clock;
mod error;
mod gateway;

pub use clock::Clock;
pub use error::{GatewayError, GatewayResult};
pub use gateway::BookingGateway;
