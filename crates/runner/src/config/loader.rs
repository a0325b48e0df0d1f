use courtside_booking::WindowError;
use courtside_gateway::GatewayConfig;
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfigFile, BookingConfigJson};

pub const ENV_HOST: &str = "COURTSIDE_HOST";
pub const ENV_TOKEN: &str = "COURTSIDE_TOKEN";
pub const ENV_OPENID: &str = "COURTSIDE_OPENID";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("No service host configured (use --config or set COURTSIDE_HOST)")]
    MissingHost,
    #[error("Invalid booking window: {0}")]
    Window(#[from] WindowError),
    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),
}

/// Load configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<AppConfigFile, ConfigError> {
    let config: AppConfigFile = serde_json::from_str(json)?;
    Ok(config)
}

impl AppConfigFile {
    /// Configuration with no file: host and credentials come from the
    /// environment alone
    pub fn empty() -> Self {
        AppConfigFile {
            gateway: GatewayConfig::new(""),
            booking: BookingConfigJson::default(),
        }
    }

    /// Overlay `COURTSIDE_HOST`, `COURTSIDE_TOKEN` and `COURTSIDE_OPENID`
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Overlay values from `lookup`; unset or empty values are ignored
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        if let Some(host) = lookup(ENV_HOST) {
            self.gateway.host = host;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.gateway.token = token;
        }
        if let Some(openid) = lookup(ENV_OPENID) {
            self.gateway.openid = openid;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.host.trim().is_empty() {
            return Err(ConfigError::MissingHost);
        }
        if self.gateway.timeout_ms == 0 {
            return Err(ConfigError::ZeroValue("gateway.timeout_ms"));
        }
        self.booking.window()?;
        if self.booking.gate_tick_ms == 0 {
            return Err(ConfigError::ZeroValue("booking.gate_tick_ms"));
        }
        if self.booking.retry_interval_ms == 0 {
            return Err(ConfigError::ZeroValue("booking.retry_interval_ms"));
        }
        if self.booking.order_page_size == 0 {
            return Err(ConfigError::ZeroValue("booking.order_page_size"));
        }
        if self.booking.max_attempts == Some(0) {
            return Err(ConfigError::ZeroValue("booking.max_attempts"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    const MINIMAL: &str = r#"{ "gateway": { "host": "https://booking.example.edu" } }"#;

    #[test]
    fn test_minimal_config_defaults() {
        let config = load_config_from_str(MINIMAL).unwrap();
        config.validate().unwrap();

        assert_eq!(config.gateway.timeout_ms, 10_000);
        assert_eq!(config.booking, BookingConfigJson::default());
        assert_eq!(config.booking.window_start, "07:00:00");
        assert_eq!(config.booking.window_end, "23:30:00");
        assert_eq!(config.booking.gate_tick(), Duration::from_secs(1));

        let retry = config.booking.retry();
        assert_eq!(retry.interval, Duration::from_secs(5));
        assert_eq!(retry.max_attempts, None);
        assert_eq!(retry.page_size, 20);
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "gateway": {
                "host": "http://localhost:9000",
                "token": "tok",
                "openid": "oid",
                "timeout_ms": 2000
            },
            "booking": {
                "window_start": "08:00:00",
                "window_end": "22:00:00",
                "retry_interval_ms": 3000,
                "max_attempts": 10
            }
        }"#;
        let config = load_config_from_str(json).unwrap();
        config.validate().unwrap();

        assert_eq!(config.gateway.token, "tok");
        assert_eq!(config.booking.window().unwrap().to_string(), "08:00:00-22:00:00");
        assert_eq!(config.booking.retry().max_attempts, Some(10));
        assert_eq!(config.booking.gate_tick_ms, 1000);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let env = HashMap::from([
            (ENV_HOST, "http://override:1"),
            (ENV_TOKEN, "env-token"),
            (ENV_OPENID, "  "),
        ]);
        let config = load_config_from_str(MINIMAL)
            .unwrap()
            .apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.gateway.host, "http://override:1");
        assert_eq!(config.gateway.token, "env-token");
        assert_eq!(config.gateway.openid, "");
    }

    #[test]
    fn test_empty_config_requires_host() {
        let config = AppConfigFile::empty().apply_overrides(|_| None);
        assert!(matches!(config.validate(), Err(ConfigError::MissingHost)));

        let config = AppConfigFile::empty()
            .apply_overrides(|name| (name == ENV_HOST).then(|| "http://h".to_string()));
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = load_config_from_str(MINIMAL).unwrap();
        config.booking.window_start = "23:00:00".to_string();
        config.booking.window_end = "07:00:00".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Window(WindowError::Inverted { .. }))
        ));

        let mut config = load_config_from_str(MINIMAL).unwrap();
        config.booking.retry_interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroValue("booking.retry_interval_ms"))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            load_config_from_str(r#"{ "booking": {} }"#),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/courtside.json"),
            Err(ConfigError::IoError(_))
        ));
    }
}
