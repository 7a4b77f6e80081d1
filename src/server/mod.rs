//! Server module
//!
//! Listener construction and the accept loop.

mod connection;
mod listener;

pub use listener::create_listener;

use crate::config::AppState;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept loop; runs for the lifetime of the process.
///
/// Accept failures are logged and the loop keeps serving.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if state.config.logging.access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                connection::spawn_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
