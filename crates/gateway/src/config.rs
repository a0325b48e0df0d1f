use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Connection settings for the remote booking service
///
/// Built once at startup and handed to the client; gateway calls never
/// read credentials from ambient state.
#[derive(Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL, e.g. "https://booking.example.edu"
    pub host: String,
    /// Session token sent as the `token` header on authenticated calls
    #[serde(default)]
    pub token: String,
    /// Account open id, sent with order submissions
    #[serde(default)]
    pub openid: String,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Optional User-Agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl GatewayConfig {
    pub fn new(host: impl Into<String>) -> Self {
        GatewayConfig {
            host: host.into(),
            token: String::new(),
            openid: String::new(),
            timeout_ms: default_timeout_ms(),
            user_agent: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_openid(mut self, openid: impl Into<String>) -> Self {
        self.openid = openid.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.host.trim_end_matches('/')
    }
}

// Credentials stay out of logs
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("host", &self.host)
            .field("token", &redact(&self.token))
            .field("openid", &redact(&self.openid))
            .field("timeout_ms", &self.timeout_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

fn default_timeout_ms() -> u64 {
    10_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let json = r#"{ "host": "http://localhost:8080/" }"#;

        let config: GatewayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.token.is_empty());
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = GatewayConfig::new("http://localhost")
            .with_token("secret-token")
            .with_openid("o-123");

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(!debug.contains("o-123"));
        assert!(debug.contains("<redacted>"));
    }
}
