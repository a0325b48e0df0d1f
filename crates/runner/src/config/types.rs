use courtside_booking::{BookingWindow, RetryConfig, WindowError};
use courtside_gateway::GatewayConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigFile {
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub booking: BookingConfigJson,
}

/// Booking behaviour (JSON representation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfigJson {
    /// First second of the daily window, "HH:MM:SS"
    #[serde(default = "default_window_start")]
    pub window_start: String,
    /// Last second of the daily window, "HH:MM:SS"
    #[serde(default = "default_window_end")]
    pub window_end: String,
    /// Countdown refresh while waiting for the window
    #[serde(default = "default_gate_tick_ms")]
    pub gate_tick_ms: u64,
    /// Pause between submission attempts
    #[serde(default = "default_retry_interval_ms")]
    pub retry_interval_ms: u64,
    /// Absent retries until an order appears
    #[serde(default)]
    pub max_attempts: Option<u32>,
    #[serde(default = "default_order_page_size")]
    pub order_page_size: u32,
}

impl Default for BookingConfigJson {
    fn default() -> Self {
        BookingConfigJson {
            window_start: default_window_start(),
            window_end: default_window_end(),
            gate_tick_ms: default_gate_tick_ms(),
            retry_interval_ms: default_retry_interval_ms(),
            max_attempts: None,
            order_page_size: default_order_page_size(),
        }
    }
}

impl BookingConfigJson {
    /// Parse the window bounds into a `BookingWindow`
    pub fn window(&self) -> Result<BookingWindow, WindowError> {
        BookingWindow::parse(&self.window_start, &self.window_end)
    }

    pub fn gate_tick(&self) -> Duration {
        Duration::from_millis(self.gate_tick_ms)
    }

    /// Convert to the retry loop's config
    pub fn retry(&self) -> RetryConfig {
        RetryConfig {
            interval: Duration::from_millis(self.retry_interval_ms),
            max_attempts: self.max_attempts,
            page_size: self.order_page_size,
        }
    }
}

fn default_window_start() -> String {
    "07:00:00".to_string()
}

fn default_window_end() -> String {
    "23:30:00".to_string()
}

fn default_gate_tick_ms() -> u64 {
    1000
}

fn default_retry_interval_ms() -> u64 {
    5000
}

fn default_order_page_size() -> u32 {
    20
}
