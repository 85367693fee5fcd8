//! Display implementation for focuswatch messages.
//!
//! Every piece of user-facing text is defined here, in one match, so that the
//! wording stays consistent between the interactive prompts, the monitor's
//! console output and the printed report.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file found, nothing to remove".to_string(),
            Message::ConfigModuleMonitor => "Monitor settings".to_string(),
            Message::PromptInterval => "Seconds between screen samples".to_string(),
            Message::PromptNotifier => "How should deviations be announced".to_string(),
            Message::PromptCaptureCommand => "Screenshot command, use {path} for the output file (leave empty to auto-detect)".to_string(),
            Message::PromptAcknowledgeAlerts => "Wait for acknowledgement after each alert".to_string(),

            // === INTENTION MESSAGES ===
            Message::IntentionQuestion => "What activities do you plan to work on?".to_string(),
            Message::IntentionExamples => [
                "Examples:",
                "- 'writing in Notepad and using Chrome for research'",
                "- 'coding in Sublime Text and using Firefox for documentation'",
                "- 'working on documents in Word and using the terminal'",
            ]
            .join("\n"),
            Message::PromptIntention => "Your planned activities".to_string(),
            Message::IntentionsSet(tags) => format!("User intentions set: {}", tags),
            Message::IntentionsEmpty => "No known activities were recognized in that description".to_string(),
            Message::IntentionsEmptyRetry => "No known activities were recognized, please name an application or a kind of work".to_string(),

            // === MONITOR MESSAGES ===
            Message::MonitorStarted { interval } => [
                "Monitoring started. The system will:".to_string(),
                format!("- Take a screenshot every {}", humanize_seconds(*interval)),
                "- Analyze your activities".to_string(),
                "- Show warnings if you deviate from your planned activities".to_string(),
                "- Save activity logs for later analysis".to_string(),
            ]
            .join("\n"),
            Message::MonitorStopHint => "Press Ctrl+C to stop monitoring and see your productivity report.".to_string(),
            Message::MonitorStopping => "Stopping monitoring...".to_string(),
            Message::MonitorStopped => "Monitoring stopped".to_string(),
            Message::MonitorAlreadyStarted => "Monitor has already been started".to_string(),
            Message::MonitorNotRunning => "Monitor is not running".to_string(),
            Message::MonitorNoIntentions => "Monitor needs at least one intention before it can start".to_string(),
            Message::SampleTaken(verdict) => format!("Sample taken, activity classified as {}", verdict),
            Message::SampleFailed(e) => format!("Error during monitoring: {}", e),
            Message::PersistFailed(e) => format!("Failed to save activity log: {}", e),
            Message::NotificationFailed(e) => format!("Failed to deliver alert: {}", e),
            Message::DeviationAlert => "Warning: Current activity doesn't match your stated intentions!".to_string(),
            Message::AlertTitle => "Procrastination Alert".to_string(),
            Message::AlertAcknowledge => "Back to work?".to_string(),

            // === SIGNAL MESSAGES ===
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatcherSignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === CAPTURE MESSAGES ===
            Message::CaptureToolNotFound => "No screenshot tool found, set one with 'focuswatch init'".to_string(),
            Message::CaptureCommandEmpty => "Configured screenshot command is empty".to_string(),
            Message::CaptureCommandFailed(program, status) => format!("Screenshot command '{}' failed: {}", program, status),
            Message::CaptureFileEmpty => "Screenshot command produced an empty file".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader => "Productivity Report:".to_string(),
            Message::ReportWork(hours) => format!("Work time: {:.2} hours", hours),
            Message::ReportEntertainment(hours) => format!("Entertainment time: {:.2} hours", hours),
            Message::ReportUnknown(hours) => format!("Unknown time: {:.2} hours", hours),
            Message::ReportProductivity(ratio) => format!("Productivity ratio: {:.2}%", ratio),
            Message::ReportNoEntries => "No activity was sampled during this session".to_string(),
            Message::ActivityLogNotFound(path) => format!("Activity log not found: {}", path),
            Message::ActivityLogParseFailed(e) => format!("Failed to read activity log: {}", e),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported to {}", path),
            Message::ExportingData(data, format) => format!("Exporting {} as {}...", data, format),
        };
        write!(f, "{}", s)
    }
}

fn humanize_seconds(seconds: u64) -> String {
    match seconds {
        1 => "second".to_string(),
        s if s % 60 == 0 && s / 60 == 1 => "minute".to_string(),
        s if s % 60 == 0 => format!("{} minutes", s / 60),
        s => format!("{} seconds", s),
    }
}
