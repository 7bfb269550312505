use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::persistence::config_dir;

const LOG_FILTER_ENV: &str = "CODECRAFT_LOG";
const DEFAULT_FILTER: &str = "codecraft=info";

fn log_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("codecraft").join("logs"));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Routes `tracing` events to a daily log file; stdout belongs to the TUI.
/// Returns `None` when no log directory is writable or a subscriber is already set.
pub(crate) fn init() -> Option<WorkerGuard> {
    let log_dir = log_dir()
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("codecraft").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "codecraft.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );
    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");
    Some(guard)
}
