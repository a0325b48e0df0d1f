//! Application configuration
//!
//! JSON file, then `COURTSIDE_*` environment overrides.

mod loader;
mod types;

pub use loader::{ConfigError, ENV_HOST, ENV_OPENID, ENV_TOKEN, load_config, load_config_from_str};
pub use types::{AppConfigFile, BookingConfigJson};
