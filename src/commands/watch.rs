//! The monitoring session.
//!
//! Asks for the planned activities, runs the monitor loop until the process
//! is interrupted and prints the session report.

use crate::{
    libs::{
        activity_log::{ActivityLog, SessionInfo, ACTIVITY_LOG_FILE_NAME},
        analysis::BrightnessExtractor,
        capture::CommandCapture,
        config::{Config, MAX_INTERVAL},
        data_storage::DataStorage,
        intention::{parse, IntentionSet},
        logging,
        messages::Message,
        monitor::MonitorLoop,
        notifier::{self, NotifierKind},
        sampler::{ActivitySampler, Sampler},
        signal,
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Planned activities; asked for interactively when omitted
    #[arg(short, long)]
    intention: Option<String>,

    /// Seconds between screen samples (overrides the configuration)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_INTERVAL))]
    interval: Option<u64>,

    /// How deviation alerts are presented (overrides the configuration)
    #[arg(long, value_enum)]
    notifier: Option<NotifierKind>,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    let _log_guard = logging::init()?;

    let mut monitor_config = Config::read()?.monitor.unwrap_or_default();
    if let Some(interval) = args.interval {
        monitor_config.interval = interval;
    }
    if let Some(notifier) = args.notifier {
        monitor_config.notifier = notifier;
    }

    let intentions = match args.intention {
        Some(text) => {
            let intentions = parse(&text);
            if intentions.is_empty() {
                msg_bail_anyhow!(Message::IntentionsEmpty);
            }
            intentions
        }
        None => prompt_intentions()?,
    };
    info!("{}", Message::IntentionsSet(intentions.to_string()));

    let capture = CommandCapture::from_config(&monitor_config)?;
    msg_debug!(format!("Screenshot tool: {}", capture.program()));
    let sampler: Arc<dyn Sampler> = Arc::new(ActivitySampler::new(capture, BrightnessExtractor::new()));
    let log = ActivityLog::persisted(DataStorage::new().get_path(ACTIVITY_LOG_FILE_NAME)?)
        .with_session(SessionInfo::new(monitor_config.interval));

    let mut monitor = MonitorLoop::new(
        intentions,
        Duration::from_secs(monitor_config.interval),
        sampler,
        notifier::from_config(&monitor_config),
        log,
    );
    monitor.start()?;

    msg_print!(Message::MonitorStarted { interval: monitor_config.interval }, true);
    msg_print!(Message::MonitorStopHint);

    let listener = signal::spawn_shutdown_listener(monitor.stop_token());
    monitor.run().await?;
    listener.abort();

    msg_info!(Message::MonitorStopped);
    if monitor.log().is_empty() {
        msg_warning!(Message::ReportNoEntries);
    }
    View::report(&monitor.report())
}

/// Asks until the answer names at least one known activity.
fn prompt_intentions() -> Result<IntentionSet> {
    msg_print!(Message::IntentionQuestion, true);
    msg_print!(Message::IntentionExamples);

    loop {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptIntention.to_string())
            .allow_empty(true)
            .interact_text()?;

        let intentions = parse(&text);
        if !intentions.is_empty() {
            return Ok(intentions);
        }
        msg_warning!(Message::IntentionsEmptyRetry);
    }
}
