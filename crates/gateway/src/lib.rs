//! Courtside Gateway
//!
//! HTTP implementation of the `BookingGateway` port.
//!
//! ```text
//! ┌──────────────────────┐   BookingGateway    ┌────────────────────────┐
//! │   courtside-booking  │ ──────────────────▶ │       RestClient       │
//! │ (matrix, gate, loop) │                     │  GET  venues / slots   │
//! └──────────────────────┘                     │  GET  booked / prices  │
//!                                              │  POST check / submit   │
//!                                              │  GET  order list       │
//!                                              └───────────┬────────────┘
//!                                                          │ {code, msg, data}
//!                                                          ▼
//!                                              ┌────────────────────────┐
//!                                              │ remote booking service │
//!                                              └────────────────────────┘
//! ```
//!
//! Every response is wrapped in the service's `{code, msg, data}`
//! envelope; `code == 1` means success. Envelope failures become
//! `GatewayError::Rejected`, payloads of the wrong shape become
//! `GatewayError::Malformed`, and network failures become
//! `GatewayError::Transport`.

pub mod config;
pub mod error;
pub mod rest_client;
mod wire;

pub use config::GatewayConfig;
pub use error::RestError;
pub use rest_client::RestClient;
