//! Data export command.
//!
//! Writes the last recorded session (or a given activity log) to CSV, JSON
//! or Excel together with its report summary.

use super::report::{load_session_log, resolve_interval};
use crate::{
    libs::{
        config::MAX_INTERVAL,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path (defaults to a timestamped name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seconds each sample accounts for (defaults to the recorded session interval)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_INTERVAL))]
    interval: Option<u64>,

    /// Activity log to read instead of the last session's
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let log = load_session_log(args.file)?;
    let interval = resolve_interval(args.interval, &log)?;
    let exporter = Exporter::new(args.format, args.output);

    msg_info!(Message::ExportingData(
        format!("{} samples", log.len()),
        args.format.extension().to_string()
    ));
    exporter.export(&log, interval)?;
    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
