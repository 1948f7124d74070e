use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upper bound accepted for `demo.fetch_delay_ms`.
pub const MAX_FETCH_DELAY_MS: u64 = 60_000;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the demo view-model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Simulated latency of a data request in milliseconds (default: 250).
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
    /// Number of data requests the CLI submits (default: 1).
    #[serde(default = "default_requests")]
    pub requests: u32,
    /// Report every request as failed through the navigation channel.
    #[serde(default)]
    pub simulate_failure: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_fetch_delay_ms() -> u64 {
    250
}

fn default_requests() -> u32 {
    1
}

fn default_filter() -> String {
    "info".to_string()
}

impl DemoConfig {
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: default_fetch_delay_ms(),
            requests: default_requests(),
            simulate_failure: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}
