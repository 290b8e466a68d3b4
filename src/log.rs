//! Append-only run log
//!
//! Every download and every failure is recorded as one timestamped line in
//! `download.log`. The file is never rotated or truncated by this tool.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;

/// Timestamp layout for log lines (UTC, microsecond precision)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Handle to the append-only download log
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// Creates a log handle for the given file path. The file itself is
    /// created lazily on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends one timestamped line to the log
    pub fn append(&self, msg: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{} {}", Utc::now().format(TIMESTAMP_FORMAT), msg)
    }
}
