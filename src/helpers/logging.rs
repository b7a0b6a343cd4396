//! Logging Setup
//!
//! `RUST_LOG` wins over the configured level. File output goes to a
//! daily-rolling file in the data directory.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::LOG_FILE_PREFIX;
use crate::domain::LogConfig;
use crate::error::Result;
use crate::helpers::get_or_create_data_dir;

/// Build the env filter, falling back to `config.level`
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole process.
pub fn init_tracing(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    if !config.file {
        tracing_subscriber::registry()
            .with(env_filter(config))
            .with(stderr_layer)
            .init();
        return Ok(None);
    }

    let log_dir = get_or_create_data_dir()?;
    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(stderr_layer)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    tracing::debug!("Writing logs to {}", log_dir.display());
    Ok(Some(guard))
}
