//! Configuration for the demo binary.
//!
//! Loaded from `~/.config/mvvm-reactor/config.toml` (or the platform
//! equivalent). A missing file yields the defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DemoConfig, LoggingConfig, MAX_FETCH_DELAY_MS};
