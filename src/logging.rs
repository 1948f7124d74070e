use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var that redirects logs to a file, overriding `logging.file`.
pub const LOG_FILE_ENV: &str = "MVVM_REACTOR_LOG";

/// Initialize tracing from the logging config.
///
/// `RUST_LOG` takes precedence over `logging.filter`. Logs go to stderr
/// unless `MVVM_REACTOR_LOG` or `logging.file` names a file, in which case
/// a unique `{path}.{timestamp}.{pid}` file is created so concurrent runs
/// don't clobber each other.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let log_path = std::env::var(LOG_FILE_ENV)
        .ok()
        .or_else(|| config.file.as_ref().map(|p| p.display().to_string()));

    let Some(log_path) = log_path else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_timer(fmt::time::UtcTime::rfc_3339());
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
