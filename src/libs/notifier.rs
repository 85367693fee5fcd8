//! Deviation alerts.
//!
//! The monitor hands the alert text to a [`Notifier`] and waits for it to
//! return. A failing notifier is logged by the monitor and otherwise ignored.
//!
//! - **terminal**: prints a warning line and, when acknowledgement is
//!   enabled, blocks on a yes/no prompt until the user answers.
//! - **desktop**: posts a system notification through `notify-send`
//!   (Linux), `osascript` (macOS) or `msg` (Windows).

use crate::libs::config::MonitorConfig;
use crate::libs::messages::Message;
use crate::msg_warning;
use dialoguer::{theme::ColorfulTheme, Confirm};
use serde::{Deserialize, Serialize};
use std::env;
use std::process::Command;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification command '{0}' failed: {1}")]
    Command(String, String),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub trait Notifier: Send + Sync {
    /// Presents `message` to the user. May block until it is acknowledged.
    fn notify(&self, message: &str) -> Result<(), NotificationError>;
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    #[default]
    Terminal,
    Desktop,
}

impl NotifierKind {
    pub const ALL: [NotifierKind; 2] = [NotifierKind::Terminal, NotifierKind::Desktop];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotifierKind::Terminal => "terminal",
            NotifierKind::Desktop => "desktop",
        }
    }
}

pub fn from_config(config: &MonitorConfig) -> Arc<dyn Notifier> {
    match config.notifier {
        NotifierKind::Terminal => Arc::new(TerminalNotifier::new(config.acknowledge_alerts)),
        NotifierKind::Desktop => Arc::new(DesktopNotifier),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier {
    acknowledge: bool,
}

impl TerminalNotifier {
    pub fn new(acknowledge: bool) -> Self {
        Self { acknowledge }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) -> Result<(), NotificationError> {
        // BEL so the alert is audible even when the terminal is in the background.
        print!("\x07");
        msg_warning!(format!("{}: {}", Message::AlertTitle, message), true);

        if self.acknowledge {
            Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::AlertAcknowledge.to_string())
                .default(true)
                .interact()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    fn command(title: &str, message: &str) -> Command {
        match env::consts::OS {
            "macos" => {
                let mut cmd = Command::new("osascript");
                cmd.arg("-e").arg(format!(
                    "display alert \"{}\" message \"{}\" as warning",
                    title.replace('"', "'"),
                    message.replace('"', "'")
                ));
                cmd
            }
            "windows" => {
                let mut cmd = Command::new("msg");
                cmd.arg("*").arg("/W").arg(format!("{}: {}", title, message));
                cmd
            }
            _ => {
                let mut cmd = Command::new("notify-send");
                cmd.arg("--urgency=critical").arg(title).arg(message);
                cmd
            }
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str) -> Result<(), NotificationError> {
        let mut cmd = Self::command(&Message::AlertTitle.to_string(), message);
        let program = cmd.get_program().to_string_lossy().to_string();
        let status = cmd.status()?;
        if !status.success() {
            return Err(NotificationError::Command(program, status.to_string()));
        }
        Ok(())
    }
}
