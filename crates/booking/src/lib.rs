//! Courtside Booking
//!
//! The booking orchestration engine:
//! - **Availability Matrix**: venue x time-slot grid built from the venue
//!   list, the slot list and the day's booked map
//! - **Slot Resolution**: operator-facing venue name and hour to the
//!   service's venue key and slot id, encoded as a scene descriptor
//! - **Submission Gate**: waits, with a live countdown, until the daily
//!   booking window opens
//! - **Retry Loop**: re-reads the remote order list before every
//!   submission and stops once a matching order exists
//!
//! ## Architecture
//!
//! ```text
//! venues ─┐
//! slots ──┼──► AvailabilityMatrix ──► rendered table
//! booked ─┘
//!
//! venue name ─┐
//! hour ───────┼──► SlotSelection ──► SceneDescriptor ──► feasibility check
//! day ────────┘                                │
//!                                              ▼
//!                                     SubmissionGate (1s ticks)
//!                                              │ window open
//!                                              ▼
//!                   ┌──────────────────── BookingRetryLoop ────────────────────┐
//!                   │  Polling ──order found──► Found                          │
//!                   │     │  no match                                          │
//!                   │     ▼                                                    │
//!                   │  Submitting ──(5s)──► Polling                            │
//!                   │  order list unreadable / cancelled ──► Aborted           │
//!                   └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The order list is the only proof of success: a submission's own
//! response is logged, never trusted.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use courtside_booking::{BookingRetryLoop, BookingTarget, RetryConfig, SubmissionGate};
//!
//! let (_stop, mut shutdown) = courtside_booking::shutdown_channel();
//! gate.await_window(&mut shutdown, |tick| print!("\r{}", tick)).await?;
//!
//! let target = BookingTarget::new(group, scene, feasibility.total_amount);
//! let mut retry = BookingRetryLoop::new(gateway, target, RetryConfig::default());
//! let outcome = retry.run(&mut shutdown).await;
//! ```

pub mod error;
pub mod matrix;
pub mod resolver;
pub mod retry;
pub mod shutdown;
pub mod window;

// Re-export main types
pub use error::{GateError, ResolveError, WindowError};
pub use matrix::{AvailabilityMatrix, MatrixColumn};
pub use resolver::{SlotSelection, resolve_slot_id, resolve_venue_key};
pub use retry::{
    AbortReason, BookingOutcome, BookingRetryLoop, BookingTarget, LoopState, RetryConfig,
};
pub use shutdown::{Shutdown, shutdown_channel};
pub use window::{BookingWindow, SubmissionGate, WindowTick, format_remaining};
