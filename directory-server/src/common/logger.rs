//! Logging Infrastructure
//!
//! Structured logging setup for both development and production:
//! console output with an env-filter, JSON format in production, and an
//! optional daily-rotating file appender.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Fallback log level when RUST_LOG is unset (e.g., "info")
/// * `json_format` - Whether to use JSON output (production)
/// * `log_dir` - Optional directory for daily-rotating file logs
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer().json().with_target(true);

        if let Some(dir) = log_dir {
            let file_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(rolling_appender(dir)?));
            subscriber.with(console_layer).with(file_layer).init();
        } else {
            subscriber.with(console_layer).init();
        }
    } else {
        let console_layer = fmt::layer().with_target(true);

        if let Some(dir) = log_dir {
            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(rolling_appender(dir)?));
            subscriber.with(console_layer).with(file_layer).init();
        } else {
            subscriber.with(console_layer).init();
        }
    }

    Ok(())
}

/// Daily rotating appender under `dir` (created if missing)
fn rolling_appender(dir: &str) -> anyhow::Result<RollingFileAppender> {
    let dir = Path::new(dir);
    std::fs::create_dir_all(dir)?;
    Ok(RollingFileAppender::new(Rotation::DAILY, dir, "app"))
}
