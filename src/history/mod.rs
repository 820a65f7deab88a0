//! Calculation history
//!
//! An append-only text log with one line per calculation:
//!
//! ```text
//! 2026-10-18 14:03:51 | 2 + 3 * 4 = 14
//! ```
//!
//! Recording is best-effort. A sink never returns an error; failures are
//! reported with `tracing::warn!` and the calculation goes on.

mod background;

pub use background::BackgroundHistory;

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, warn};

/// Timestamp layout of a history line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination for finished calculations
pub trait HistorySink {
    /// Record one calculation; never fails
    fn record(
        &self,
        expression: &str,
        result: f64,
    );

    /// Record a calculation that finished at `at`
    ///
    /// Sinks without timestamps ignore `at`.
    fn record_at(
        &self,
        expression: &str,
        result: f64,
        _at: DateTime<Local>,
    ) {
        self.record(expression, result)
    }

    /// Most recent `limit` entries, oldest first
    fn recent(
        &self,
        _limit: usize,
    ) -> Vec<String> {
        Vec::new()
    }
}

/// Discards every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHistory;

impl HistorySink for NoHistory {
    fn record(
        &self,
        _expression: &str,
        _result: f64,
    ) {
    }
}

impl<S: HistorySink + ?Sized> HistorySink for Box<S> {
    fn record(
        &self,
        expression: &str,
        result: f64,
    ) {
        (**self).record(expression, result)
    }

    fn record_at(
        &self,
        expression: &str,
        result: f64,
        at: DateTime<Local>,
    ) {
        (**self).record_at(expression, result, at)
    }

    fn recent(
        &self,
        limit: usize,
    ) -> Vec<String> {
        (**self).recent(limit)
    }
}

/// History file on disk
#[derive(Debug, Clone)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.calc_history/history.txt`
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))?;
        Some(PathBuf::from(home).join(".calc_history").join("history.txt"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line stamped with the current time
    pub fn append(
        &self,
        expression: &str,
        result: f64,
    ) -> io::Result<()> {
        self.append_at(expression, result, Local::now())
    }

    /// Append one line stamped with `at`, creating the directory on demand
    pub fn append_at(
        &self,
        expression: &str,
        result: f64,
        at: DateTime<Local>,
    ) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_entry(expression, result, &at))
    }

    /// Last `limit` lines of the log, oldest first
    ///
    /// A missing file is an empty history; unreadable files warn and
    /// also yield nothing.
    pub fn load(
        &self,
        limit: usize,
    ) -> Vec<String> {
        if !self.path.exists() {
            return Vec::new();
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let lines: Vec<&str> = content.lines().collect();
                let skip = lines.len().saturating_sub(limit);
                lines[skip..].iter().map(|l| l.to_string()).collect()
            }
            Err(e) => {
                warn!("Could not load history file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }
}

impl HistorySink for FileHistory {
    fn record(
        &self,
        expression: &str,
        result: f64,
    ) {
        self.record_at(expression, result, Local::now())
    }

    fn record_at(
        &self,
        expression: &str,
        result: f64,
        at: DateTime<Local>,
    ) {
        match self.append_at(expression, result, at) {
            Ok(()) => debug!(path = %self.path.display(), "history recorded"),
            Err(e) => warn!("Could not save to history file: {}", e),
        }
    }

    fn recent(
        &self,
        limit: usize,
    ) -> Vec<String> {
        self.load(limit)
    }
}

/// One history line stamped with `at`
pub fn format_entry(
    expression: &str,
    result: f64,
    at: &DateTime<Local>,
) -> String {
    format!("{} | {} = {}", at.format(TIMESTAMP_FORMAT), expression, result)
}
