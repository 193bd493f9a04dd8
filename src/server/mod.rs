// Server module entry point
// Listener creation, accept loop, and per-connection serving

pub mod connection;
pub mod listener;

pub use connection::accept_connection;
pub use listener::bind_listener;

use crate::config::Config;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept loop: one iteration per incoming connection
///
/// Each accepted connection is served on a local task; accept errors are
/// logged and the loop continues.
pub async fn run(
    listener: TcpListener,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                accept_connection(stream, peer_addr, &config);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
