//! Courtside Clock Infrastructure
//!
//! Provides the time sources the booking window is evaluated against:
//!
//! - `SystemClock`: local wall-clock time, for real runs
//! - `ManualClock`: time that only moves when told to (or by a fixed step
//!   per read), for deterministic tests
//!
//! ## Usage
//!
//! ```ignore
//! use courtside_clock::{ManualClock, SystemClock};
//! use chrono::{Duration, NaiveDate};
//!
//! let clock = ManualClock::new(
//!     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(6, 59, 58).unwrap(),
//! )
//! .with_step(Duration::seconds(1));
//!
//! clock.now(); // 06:59:58, next read returns 06:59:59
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use courtside_ports::Clock;
