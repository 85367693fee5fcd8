//! Append-only activity log.
//!
//! Every successful tick appends one [`LogEntry`]. The log keeps entries in
//! insertion order, which is also chronological order, and never removes or
//! reorders them. When a persistence path is set, the complete sequence is
//! rewritten to that file as pretty-printed JSON after every append:
//!
//! ```json
//! [
//!   {
//!     "timestamp": "2025-01-15T09:05:00.123456+01:00",
//!     "activity_type": "work",
//!     "details": {
//!       "detected_apps": [],
//!       "has_text_editor": true,
//!       "has_browser": false,
//!       "has_terminal": false,
//!       "has_entertainment": false
//!     }
//!   }
//! ]
//! ```
//!
//! A failed write never costs an entry: the in-memory sequence is kept and
//! the next append rewrites the whole file again.
//!
//! The file holds entries only. The sampling interval of the session that
//! wrote it goes to a [`SessionInfo`] file next to it
//! (`activity_log.session.json`), so offline reports charge each entry the
//! interval it was really sampled at.

use crate::libs::classifier::Verdict;
use crate::libs::sampler::Observation;
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ACTIVITY_LOG_FILE_NAME: &str = "activity_log.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    #[serde(rename = "activity_type")]
    pub verdict: Verdict,
    #[serde(rename = "details")]
    pub observation: Observation,
}

impl LogEntry {
    pub fn new(timestamp: DateTime<Local>, verdict: Verdict, observation: Observation) -> Self {
        Self {
            timestamp,
            verdict,
            observation,
        }
    }

    /// An entry stamped with the current local time.
    pub fn now(verdict: Verdict, observation: Observation) -> Self {
        Self::new(Local::now(), verdict, observation)
    }
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize activity log: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Facts about the session that wrote a persisted log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub interval_seconds: u64,
}

impl SessionInfo {
    pub fn new(interval_seconds: u64) -> Self {
        Self { interval_seconds }
    }

    /// Where the session file of the log at `log_path` lives.
    pub fn path_for(log_path: &Path) -> PathBuf {
        log_path.with_extension("session.json")
    }
}

#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
    path: Option<PathBuf>,
    session: Option<SessionInfo>,
}

impl ActivityLog {
    /// A log that lives in memory only.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// An empty log persisted to `path`. Whatever the file held before is
    /// overwritten on the first append; it is never read back.
    pub fn persisted(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            path: Some(path.into()),
            session: None,
        }
    }

    /// Records `session` next to the entries on every persist.
    pub fn with_session(mut self, session: SessionInfo) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<SessionInfo> {
        self.session
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Appends an entry and rewrites the persisted copy.
    ///
    /// The entry is part of the log even when `Err` is returned. A timestamp
    /// that is not later than the previous entry's (clock adjustments) is
    /// moved to one millisecond after it.
    pub fn append(&mut self, mut entry: LogEntry) -> Result<(), PersistError> {
        if let Some(last) = self.entries.last() {
            if entry.timestamp <= last.timestamp {
                entry.timestamp = last.timestamp + Duration::milliseconds(1);
            }
        }
        self.entries.push(entry);
        self.persist()
    }

    /// Rewrites the whole sequence to the persistence path, if any, then the
    /// session file. A log without session info removes a stale one.
    pub fn persist(&self) -> Result<(), PersistError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        write_json(path, &self.entries)?;

        let session_path = SessionInfo::path_for(path);
        match &self.session {
            Some(session) => write_json(&session_path, session),
            None => match fs::remove_file(&session_path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(PersistError::Io { path: session_path, source: e }),
                _ => Ok(()),
            },
        }
    }

    pub fn all(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a previously persisted log for offline reporting and export.
    /// The returned log is in-memory only.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let entries: Vec<LogEntry> = serde_json::from_str(&content)?;

        let session_path = SessionInfo::path_for(path);
        let session = if session_path.exists() {
            Some(serde_json::from_str(&fs::read_to_string(session_path)?)?)
        } else {
            None
        };

        Ok(Self { entries, path: None, session })
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PersistError> {
    let io_err = |source: std::io::Error| PersistError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
