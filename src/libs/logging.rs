//! Tracing setup for monitoring sessions.
//!
//! Tick-level events are written twice: to stdout and to a daily rolling
//! file `focuswatch.log.YYYY-MM-DD` in the `logs` directory of the data
//! storage. The filter defaults to `info` and honours `RUST_LOG`.

use crate::libs::data_storage::DataStorage;
use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "focuswatch.log";

/// Installs the global subscriber. Keep the returned guard alive for as long
/// as events should reach the file; dropping it flushes the writer.
pub fn init() -> Result<WorkerGuard> {
    let log_dir = DataStorage::new().get_dir(LOG_DIR)?;
    let (file_writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(guard)
}
