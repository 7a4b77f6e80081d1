//! Request log writer
//!
//! Appends request lines to a flat text file. Writes are best-effort: a
//! failure is reported on stdout and the request pipeline is never blocked.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Global request log, set once at startup
static REQUEST_LOG: OnceLock<RequestLog> = OnceLock::new();

struct RequestLog {
    path: String,
    file: Mutex<File>,
}

/// Open the request log file and install the global writer.
///
/// Should be called once at application startup. Returns an error if the
/// file cannot be opened; callers may treat that as non-fatal and fall back
/// to stdout-only logging.
pub fn init(path: &str) -> io::Result<()> {
    let file = open_log_file(path)?;
    REQUEST_LOG
        .set(RequestLog {
            path: path.to_string(),
            file: Mutex::new(file),
        })
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "request log already initialized"))
}

/// Append one line (plus newline) to the request log.
///
/// A failed write is reported and otherwise swallowed.
pub fn append(line: &str) {
    let Some(log) = REQUEST_LOG.get() else {
        return;
    };
    match log.file.lock() {
        Ok(mut file) => {
            if writeln!(file, "{line}").is_err() {
                println!("Unable to append to {}", log.path);
            }
        }
        Err(_) => println!("Unable to append to {}", log.path),
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}
