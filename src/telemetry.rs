use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

/// Install the console's tracing subscriber with a rolling daily log.
///
/// The returned guard must be held for the lifetime of the process or
/// buffered log lines are dropped on exit.
pub fn init(log_dir: &str) -> Result<WorkerGuard> {
    let file_appender = rolling::daily(log_dir, "console.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
