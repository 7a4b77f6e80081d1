//! Request log format module
//!
//! One inbound request produces one text line:
//! `<timestamp>: <METHOD> <path>`

use chrono::{DateTime, Local};

/// Weekday, date and wall-clock time, e.g. `Wed Aug 06 2025 10:15:42`
const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S";

/// Everything recorded about a request; consumed to build the log line and
/// dropped afterwards.
#[derive(Debug, Clone)]
pub struct RequestLogEntry {
    /// Wall-clock time at invocation
    pub time: DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
}

impl RequestLogEntry {
    /// Create a new entry stamped with the current local time
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            time: Local::now(),
            method: method.to_string(),
            path: path.to_string(),
        }
    }

    /// Format the entry as a single log line
    pub fn format(&self) -> String {
        format!(
            "{}: {} {}",
            self.time.format(TIMESTAMP_FORMAT),
            self.method,
            self.path
        )
    }
}
