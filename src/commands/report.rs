use crate::{
    libs::{
        activity_log::{ActivityLog, ACTIVITY_LOG_FILE_NAME},
        config::{Config, MAX_INTERVAL},
        data_storage::DataStorage,
        messages::Message,
        report,
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Seconds each sample accounts for (defaults to the recorded session interval)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_INTERVAL))]
    interval: Option<u64>,

    /// Also list every recorded sample
    #[arg(short, long)]
    entries: bool,

    /// Activity log to read instead of the last session's
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let log = load_session_log(report_args.file)?;
    let interval = resolve_interval(report_args.interval, &log)?;

    if log.is_empty() {
        msg_warning!(Message::ReportNoEntries);
    } else if report_args.entries {
        View::entries(log.all())?;
    }

    View::report(&report::generate(log.all(), interval))
}

/// Loads the persisted log of the last session, or `file` when given,
/// together with its session info.
pub fn load_session_log(file: Option<PathBuf>) -> Result<ActivityLog> {
    let path = match file {
        Some(path) => path,
        None => DataStorage::new().get_path(ACTIVITY_LOG_FILE_NAME)?,
    };

    if !path.exists() {
        msg_bail_anyhow!(Message::ActivityLogNotFound(path.display().to_string()));
    }

    ActivityLog::load(&path).map_err(|e| msg_error_anyhow!(Message::ActivityLogParseFailed(e.to_string())))
}

/// Seconds each entry of `log` accounts for: the explicit override, else the
/// interval the session recorded, else the configured one.
pub fn resolve_interval(interval: Option<u64>, log: &ActivityLog) -> Result<u64> {
    if let Some(interval) = interval.or_else(|| log.session().map(|s| s.interval_seconds)) {
        return Ok(interval);
    }
    Ok(Config::read()?.monitor.unwrap_or_default().interval)
}
