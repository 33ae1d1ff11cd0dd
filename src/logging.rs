use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::paths::{ensure_dir, get_log_dir};

/// Guards that must be kept alive to ensure logs are flushed
pub struct LoggingGuards {
    _guards: Vec<WorkerGuard>,
}

/// Initialize file logging: a daily-rolling `todos.log` in the log
/// directory, filtered by `RUST_LOG` (default `info`).
///
/// Call once at startup and keep the returned guards alive for the lifetime
/// of the process.
pub fn init_logging() -> LoggingGuards {
    let log_dir = get_log_dir();
    ensure_dir(&log_dir).expect("Failed to create logs directory");

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "todos.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false),
    );

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    tracing::info!(target: "system", "Logging initialized at {:?}", log_dir);

    LoggingGuards { _guards: vec![guard] }
}
