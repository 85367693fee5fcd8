//! Time allocation report.
//!
//! Durations use fixed-bucket accounting: every logged tick counts as exactly
//! one sampling interval for its verdict, no matter how long the tick really
//! took.
//!
//! ```text
//! Productivity = (Work Time / (Work + Entertainment + Unknown Time)) * 100
//! ```
//!
//! A report is derived from the log every time it is asked for; nothing is
//! cached between calls. Durations saturate at `u64::MAX` seconds. The ratio
//! is taken over entry counts, which equals the ratio of the unsaturated
//! durations.

use crate::libs::activity_log::LogEntry;
use crate::libs::classifier::Verdict;
use serde::Serialize;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub work_seconds: u64,
    pub entertainment_seconds: u64,
    pub unknown_seconds: u64,
    pub productivity_ratio: f64,
}

impl Report {
    pub fn total_seconds(&self) -> u64 {
        self.work_seconds
            .saturating_add(self.entertainment_seconds)
            .saturating_add(self.unknown_seconds)
    }

    pub fn work_hours(&self) -> f64 {
        self.work_seconds as f64 / SECONDS_PER_HOUR
    }

    pub fn entertainment_hours(&self) -> f64 {
        self.entertainment_seconds as f64 / SECONDS_PER_HOUR
    }

    pub fn unknown_hours(&self) -> f64 {
        self.unknown_seconds as f64 / SECONDS_PER_HOUR
    }
}

/// Aggregates log entries into per-verdict durations.
///
/// # Examples
///
/// ```rust
/// use focuswatch::libs::activity_log::LogEntry;
/// use focuswatch::libs::classifier::Verdict;
/// use focuswatch::libs::report::generate;
/// use focuswatch::libs::sampler::Observation;
///
/// let entries = vec![
///     LogEntry::now(Verdict::Work, Observation::default()),
///     LogEntry::now(Verdict::Unknown, Observation::default()),
/// ];
/// let report = generate(&entries, 300);
/// assert_eq!(report.work_seconds, 300);
/// assert_eq!(report.productivity_ratio, 50.0);
/// ```
pub fn generate(entries: &[LogEntry], interval_seconds: u64) -> Report {
    let (mut work, mut entertainment, mut unknown) = (0u64, 0u64, 0u64);

    for entry in entries {
        match entry.verdict {
            Verdict::Work => work += 1,
            Verdict::Entertainment => entertainment += 1,
            Verdict::Unknown => unknown += 1,
        }
    }

    let total = entries.len();
    let productivity_ratio = if total > 0 { work as f64 / total as f64 * 100.0 } else { 0.0 };

    Report {
        work_seconds: work.saturating_mul(interval_seconds),
        entertainment_seconds: entertainment.saturating_mul(interval_seconds),
        unknown_seconds: unknown.saturating_mul(interval_seconds),
        productivity_ratio,
    }
}
