//! Configuration management for focuswatch.
//!
//! The configuration is a small JSON document stored next to the other
//! application data (see [`DataStorage`]). A missing file is not an error:
//! every setting has a default, so the monitor runs without any setup.
//!
//! ## Configuration Structure
//!
//! - **Monitor Config**: sampling interval, alert delivery and the screenshot
//!   command
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use focuswatch::libs::config::Config;
//!
//! let config = Config::read()?;
//! let monitor = config.monitor.unwrap_or_default();
//! println!("Sampling every {}s", monitor.interval);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::notifier::NotifierKind;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default seconds between two screen samples.
pub const DEFAULT_INTERVAL: u64 = 300;

/// Longest accepted sampling interval, one day.
pub const MAX_INTERVAL: u64 = 86_400;

/// Monitor configuration settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    /// Seconds between two screen samples.
    ///
    /// Also the duration each sample accounts for in reports, so changing it
    /// between a session and its report skews the numbers.
    pub interval: u64,

    /// How deviation alerts are presented.
    pub notifier: NotifierKind,

    /// Screenshot command line with a `{path}` placeholder for the output
    /// file. `None` picks a platform tool automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_command: Option<String>,

    /// Whether a terminal alert waits for the user to acknowledge it.
    pub acknowledge_alerts: bool,
}

impl Default for MonitorConfig {
    /// Defaults:
    /// - 300 seconds between samples
    /// - terminal alerts without acknowledgement
    /// - auto-detected screenshot tool
    fn default() -> Self {
        MonitorConfig {
            interval: DEFAULT_INTERVAL,
            notifier: NotifierKind::Terminal,
            capture_command: None,
            acknowledge_alerts: false,
        }
    }
}

/// Main configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Monitor configuration. Unset means all defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads configuration from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, replacing any previous file.
    pub fn save(&self) -> Result<()> {
        let config_file = File::create(Self::path()?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Runs the interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.monitor.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleMonitor);

        let interval: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptInterval.to_string())
            .default(default.interval)
            .validate_with(|value: &u64| {
                if (1..=MAX_INTERVAL).contains(value) {
                    Ok(())
                } else {
                    Err(format!("must be between 1 and {}", MAX_INTERVAL))
                }
            })
            .interact_text()?;

        let kinds = NotifierKind::ALL;
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNotifier.to_string())
            .items(&kinds.iter().map(NotifierKind::as_str).collect::<Vec<_>>())
            .default(kinds.iter().position(|k| *k == default.notifier).unwrap_or(0))
            .interact()?;
        let notifier = kinds[selected];

        let acknowledge_alerts = match notifier {
            NotifierKind::Terminal => Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAcknowledgeAlerts.to_string())
                .default(default.acknowledge_alerts)
                .interact()?,
            NotifierKind::Desktop => false,
        };

        let capture_command: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCaptureCommand.to_string())
            .default(default.capture_command.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        config.monitor = Some(MonitorConfig {
            interval,
            notifier,
            capture_command: Some(capture_command.trim().to_string()).filter(|c| !c.is_empty()),
            acknowledge_alerts,
        });

        Ok(config)
    }
}
