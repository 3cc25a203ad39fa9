//! TOML configuration: API origin, timeouts, UI and logging settings.
//!
//! The loaded config is read-only for the life of the process.

mod loader;
mod types;

pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig};
