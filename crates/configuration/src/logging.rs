use crate::error::ConfigError;
use crate::settings::LoggingSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "handelsmonitor.log";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level`. When a log directory is
/// configured, the returned guard must be held for the lifetime of the process,
/// otherwise buffered file output is lost.
pub fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| {
            ConfigError::LoggingError(format!("invalid log filter '{}': {e}", settings.level))
        })?;

    let stdout_layer = fmt::layer().with_target(true);

    match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_ansi(false).with_writer(writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(file_layer)
                .try_init()
                .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .try_init()
                .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

            Ok(None)
        }
    }
}
