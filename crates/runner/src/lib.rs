//! Courtside Runner - interactive court booking
//!
//! Wires the HTTP gateway, the system clock and the booking engine
//! into an operator session:
//!
//! - **Config**: JSON file plus `COURTSIDE_*` environment overrides
//! - **Console**: prompts and progress output over any reader/writer
//! - **Session**: prepare (prompts, availability, feasibility), then
//!   book (window wait, retry loop)
//!
//! ## Architecture
//!
//! ```text
//!   config.json + env
//!          │
//!          ▼
//!   ┌──────────────┐   prompts   ┌──────────────────┐
//!   │   Console    │◄───────────►│  BookingSession  │
//!   └──────────────┘             │  prepare / book  │
//!                                └────────┬─────────┘
//!                                         │ BookingGateway
//!                                         ▼
//!                                ┌──────────────────┐
//!                                │    RestClient    │
//!                                └──────────────────┘
//! ```

pub mod config;
pub mod console;
pub mod render;
pub mod session;

// Re-export main types
pub use config::{AppConfigFile, BookingConfigJson, ConfigError, load_config, load_config_from_str};
pub use console::Console;
pub use session::{BookingPlan, BookingSession, SessionError, SessionSettings, Step};
