//! Logger module
//!
//! Provides logging utilities for the server:
//! - the per-request log line, written to stdout and appended to a file
//! - server lifecycle logging
//! - error and warning logging

mod format;
pub mod writer;

pub use format::RequestLogEntry;

use crate::config::Config;
use hyper::Method;
use std::net::SocketAddr;

/// Initialize the request log file.
///
/// Failure to open the file is reported and the process continues with
/// stdout-only request logging; a lost log line must never cost a response.
pub fn init(config: &Config) {
    if let Err(err) = writer::init(&config.logging.request_log_file) {
        eprintln!(
            "[WARN] Unable to open {}: {err}. Request lines will only reach stdout.",
            config.logging.request_log_file
        );
    }
}

/// Record one inbound request.
///
/// The line goes to stdout and to the request log file. This always returns
/// so the pipeline continues regardless of the write outcome.
pub fn log_request(method: &Method, path: &str) {
    let line = RequestLogEntry::new(method.as_str(), path).format();
    println!("{line}");
    writer::append(&line);
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server is up on port {}", addr.port());
    println!("Listening on: http://{addr}");
    println!("Template directory: {}", config.resources.template_dir);
    println!("Public directory: {}", config.resources.public_dir);
    println!("Request log: {}", config.logging.request_log_file);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
