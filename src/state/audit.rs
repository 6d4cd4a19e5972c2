//! Audit log.
//!
//! Every invocation appends to `logs.log`, one line per event:
//!
//! ```text
//! 2024-05-01 12:00:00 - Command: ls, Status: Success
//! 2024-05-01 12:00:05 - Command: cat, Status: Error, Error: The path '/x' does not exist.
//! ```
//!
//! The log is never truncated or rotated.

use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FsnavError, Result};

/// File name of the audit log.
pub const LOG_FILE: &str = "logs.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome recorded for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStatus {
    Success,
    Error,
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single audit log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    /// Local time the entry was written.
    pub timestamp: NaiveDateTime,

    /// Command name as typed by the user.
    pub command: String,

    /// Outcome.
    pub status: AuditStatus,

    /// Error message, if any.
    pub error: Option<String>,
}

impl AuditEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(command: &str, status: AuditStatus, error: Option<&str>) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            command: command.to_string(),
            status,
            error: error.map(String::from),
        }
    }

    /// Format as a log line, without the trailing newline.
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "{} - Command: {}, Status: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.command,
            self.status
        );
        if let Some(ref error) = self.error {
            line.push_str(&format!(", Error: {}", error));
        }
        line
    }

    /// Parse a log line written by [`AuditEntry::to_line`].
    pub fn parse_line(line: &str) -> Option<Self> {
        let (timestamp, rest) = line.split_once(" - Command: ")?;
        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
        let (command, rest) = rest.split_once(", Status: ")?;

        let (status, error) = match rest.split_once(", Error: ") {
            Some((status, error)) => (status, Some(error.to_string())),
            None => (rest, None),
        };
        let status = match status {
            "Success" => AuditStatus::Success,
            "Error" => AuditStatus::Error,
            _ => return None,
        };

        Some(Self {
            timestamp,
            command: command.to_string(),
            status,
            error,
        })
    }
}

/// Append-only audit log backed by a text file.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Create a log that lives in `state_dir`.
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(LOG_FILE),
        }
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry for `command`.
    pub fn append(&self, command: &str, status: AuditStatus, message: Option<&str>) -> Result<()> {
        let entry = AuditEntry::now(command, status, message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| FsnavError::io("open audit log", &self.path, e))?;
        writeln!(file, "{}", entry.to_line())
            .map_err(|e| FsnavError::io("write audit log", &self.path, e))?;
        Ok(())
    }

    /// Full log contents, or `None` if nothing was ever logged.
    pub fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FsnavError::io("read audit log", &self.path, e)),
        }
    }

    /// Parsed entries in file order. Lines that don't parse are skipped.
    pub fn entries(&self) -> Result<Vec<AuditEntry>> {
        Ok(self
            .read()?
            .unwrap_or_default()
            .lines()
            .filter_map(AuditEntry::parse_line)
            .collect())
    }
}
