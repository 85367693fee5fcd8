//! The monitoring loop.
//!
//! A [`MonitorLoop`] owns everything a session needs: the declared
//! intentions, the sampler and notifier collaborators and the activity log.
//! It moves through three states:
//!
//! ```text
//! Idle ──start()──▶ Running ──stop() / token cancelled──▶ Stopped
//! ```
//!
//! `Stopped` is terminal; a new session needs a new loop.
//!
//! While running, every tick does, strictly in this order:
//!
//! 1. sample the screen (a failed sample ends the tick early, nothing logged)
//! 2. classify the observation
//! 3. alert the user if the verdict deviates from the intentions
//! 4. append the verdict to the log
//!
//! and then sleeps for the configured interval. Cancellation is only looked
//! at between ticks: a tick that has started always finishes, but the sleep
//! after it ends as soon as the stop token is cancelled.

use crate::libs::activity_log::{ActivityLog, LogEntry};
use crate::libs::classifier::{classify, Verdict};
use crate::libs::intention::{deviates, IntentionSet};
use crate::libs::messages::Message;
use crate::libs::notifier::Notifier;
use crate::libs::report::{self, Report};
use crate::libs::sampler::Sampler;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorError {
    #[error("{}", Message::MonitorNoIntentions)]
    NoIntentions,
    #[error("{}", Message::MonitorAlreadyStarted)]
    AlreadyStarted,
    #[error("{}", Message::MonitorNotRunning)]
    NotRunning,
}

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Logged(Verdict),
    Skipped,
}

pub struct MonitorLoop {
    state: MonitorState,
    intentions: IntentionSet,
    interval: Duration,
    sampler: Arc<dyn Sampler>,
    notifier: Arc<dyn Notifier>,
    log: ActivityLog,
    cancel: CancellationToken,
}

impl MonitorLoop {
    pub fn new(intentions: IntentionSet, interval: Duration, sampler: Arc<dyn Sampler>, notifier: Arc<dyn Notifier>, log: ActivityLog) -> Self {
        Self {
            state: MonitorState::Idle,
            intentions,
            interval,
            sampler,
            notifier,
            log,
            cancel: CancellationToken::new(),
        }
    }

    /// Uses `token` as the stop token instead of a fresh one.
    pub fn with_stop_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn intentions(&self) -> &IntentionSet {
        &self.intentions
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Token that stops the loop when cancelled. Cloning it is how another
    /// task (a signal listener, a test) requests a stop.
    pub fn stop_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn start(&mut self) -> Result<(), MonitorError> {
        match self.state {
            MonitorState::Idle if self.intentions.is_empty() => Err(MonitorError::NoIntentions),
            MonitorState::Idle => {
                self.state = MonitorState::Running;
                info!(intentions = %self.intentions, interval_secs = self.interval.as_secs(), "monitor started");
                Ok(())
            }
            MonitorState::Running | MonitorState::Stopped => Err(MonitorError::AlreadyStarted),
        }
    }

    pub fn stop(&mut self) {
        self.cancel.cancel();
        if self.state != MonitorState::Stopped {
            self.state = MonitorState::Stopped;
            info!(entries = self.log.len(), "monitor stopped");
        }
    }

    /// Runs ticks until the stop token is cancelled, then moves to `Stopped`.
    pub async fn run(&mut self) -> Result<(), MonitorError> {
        if self.state != MonitorState::Running {
            return Err(MonitorError::NotRunning);
        }

        while !self.cancel.is_cancelled() {
            self.tick().await?;

            tokio::select! {
                _ = self.cancel.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        self.stop();
        Ok(())
    }

    /// Executes one tick. Sampling and alerting run on the blocking pool and
    /// are awaited to completion.
    pub async fn tick(&mut self) -> Result<TickOutcome, MonitorError> {
        if self.state != MonitorState::Running {
            return Err(MonitorError::NotRunning);
        }

        let sampler = Arc::clone(&self.sampler);
        let observation = match tokio::task::spawn_blocking(move || sampler.sample()).await {
            Ok(Ok(observation)) => observation,
            Ok(Err(e)) => {
                error!("{}", Message::SampleFailed(e.to_string()));
                return Ok(TickOutcome::Skipped);
            }
            Err(e) => {
                error!("{}", Message::SampleFailed(e.to_string()));
                return Ok(TickOutcome::Skipped);
            }
        };

        let verdict = classify(&observation, &self.intentions);
        if deviates(verdict) {
            self.alert().await;
        }

        if let Err(e) = self.log.append(LogEntry::now(verdict, observation)) {
            warn!("{}", Message::PersistFailed(e.to_string()));
        }
        info!(entries = self.log.len(), "{}", Message::SampleTaken(verdict.to_string()));

        Ok(TickOutcome::Logged(verdict))
    }

    async fn alert(&self) {
        let notifier = Arc::clone(&self.notifier);
        let message = Message::DeviationAlert.to_string();
        let delivered = tokio::task::spawn_blocking(move || notifier.notify(&message)).await;

        match delivered {
            Ok(Ok(())) => info!("deviation alert delivered"),
            Ok(Err(e)) => warn!("{}", Message::NotificationFailed(e.to_string())),
            Err(e) => warn!("{}", Message::NotificationFailed(e.to_string())),
        }
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Report over everything logged so far, computed fresh on every call.
    pub fn report(&self) -> Report {
        report::generate(self.log.all(), self.interval.as_secs())
    }
}
